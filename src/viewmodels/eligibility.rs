// ============================================================================
// ELIGIBILITY - Qué puede hacer el usuario actual sobre cada sesión
// ============================================================================
// Funciones puras de (sesión, rol, avaliações ya hechas); se re-evalúan en
// cada render.
// ============================================================================

use std::collections::HashSet;
use crate::models::{CurrentUser, MentorshipSession, Role, SessionStatus};

/// Ids de sesiones ya avaliadas por el usuario actual (solo inserción)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewedSessions(HashSet<i64>);

impl ReviewedSessions {
    /// Devuelve `false` si ya estaba (inserción idempotente)
    pub fn insert(&mut self, session_id: i64) -> bool {
        self.0.insert(session_id)
    }

    pub fn contains(&self, session_id: i64) -> bool {
        self.0.contains(&session_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<i64> for ReviewedSessions {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn can_review(session: &MentorshipSession, reviewed: &ReviewedSessions) -> bool {
    session.status == SessionStatus::Completed && !reviewed.contains(session.id)
}

pub fn can_update_status(session: &MentorshipSession, user: &CurrentUser) -> bool {
    !session.status.transitions_for(user.role).is_empty()
}

/// El panel de detalle solo se despliega si hay alguna acción disponible
pub fn can_expand(session: &MentorshipSession, user: Option<&CurrentUser>, reviewed: &ReviewedSessions) -> bool {
    can_review(session, reviewed) || user.is_some_and(|u| can_update_status(session, u))
}

/// Texto de ayuda de cada fila
pub fn session_hint(session: &MentorshipSession, role: Role) -> &'static str {
    match role {
        Role::Mentor => {
            if session.status.is_terminal() {
                "Status não pode ser alterado"
            } else {
                "Clique para gerenciar status"
            }
        }
        Role::Mentorado => {
            if session.status == SessionStatus::Completed {
                "Clique para avaliar"
            } else {
                "Avaliação disponível após conclusão"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: i64, status: SessionStatus) -> MentorshipSession {
        MentorshipSession {
            id,
            status,
            mentor_id: Some(1),
            mentored_id: Some(2),
            mentor_name: None,
            mentored_name: None,
            date: None,
            time: None,
            topic: None,
        }
    }

    fn user(role: Role) -> CurrentUser {
        CurrentUser { id: 1, email: None, role }
    }

    #[test]
    fn test_can_review_requires_completed() {
        let reviewed = ReviewedSessions::default();
        let all_reviewed: ReviewedSessions = (1..=10).collect();
        for status in SessionStatus::ALL {
            let s = session(5, status);
            if status != SessionStatus::Completed {
                assert!(!can_review(&s, &reviewed));
                assert!(!can_review(&s, &all_reviewed));
            }
        }
    }

    #[test]
    fn test_can_review_completed_depends_on_membership() {
        let s = session(7, SessionStatus::Completed);
        let mut reviewed = ReviewedSessions::default();
        assert!(can_review(&s, &reviewed));

        assert!(reviewed.insert(7));
        assert!(!can_review(&s, &reviewed));

        // Inserción idempotente
        assert!(!reviewed.insert(7));
        assert_eq!(reviewed.len(), 1);
        assert!(!can_review(&s, &reviewed));
    }

    #[test]
    fn test_can_update_status_only_mentor_on_open_sessions() {
        let mentor = user(Role::Mentor);
        let mentorado = user(Role::Mentorado);
        for status in SessionStatus::ALL {
            let s = session(1, status);
            let open = matches!(status, SessionStatus::Pending | SessionStatus::Accepted);
            assert_eq!(can_update_status(&s, &mentor), open, "{:?}", status);
            assert!(!can_update_status(&s, &mentorado));
        }
    }

    #[test]
    fn test_can_expand() {
        let reviewed: ReviewedSessions = [3].into_iter().collect();
        let mentor = user(Role::Mentor);
        let mentorado = user(Role::Mentorado);

        assert!(can_expand(&session(1, SessionStatus::Pending), Some(&mentor), &reviewed));
        assert!(!can_expand(&session(1, SessionStatus::Pending), Some(&mentorado), &reviewed));
        assert!(can_expand(&session(2, SessionStatus::Completed), Some(&mentorado), &reviewed));
        assert!(!can_expand(&session(3, SessionStatus::Completed), Some(&mentorado), &reviewed));
        assert!(!can_expand(&session(4, SessionStatus::Cancelled), Some(&mentor), &reviewed));
        assert!(!can_expand(&session(1, SessionStatus::Pending), None, &reviewed));
    }

    #[test]
    fn test_session_hints() {
        assert_eq!(session_hint(&session(1, SessionStatus::Accepted), Role::Mentor), "Clique para gerenciar status");
        assert_eq!(session_hint(&session(1, SessionStatus::Completed), Role::Mentor), "Status não pode ser alterado");
        assert_eq!(session_hint(&session(1, SessionStatus::Completed), Role::Mentorado), "Clique para avaliar");
        assert_eq!(session_hint(&session(1, SessionStatus::Pending), Role::Mentorado), "Avaliação disponível após conclusão");
    }
}
