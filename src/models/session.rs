use serde::{Deserialize, Serialize};
use crate::models::auth::Role;

// ============================================================================
// SESIÓN DE MENTORÍA - Estado autoritativo del servidor
// ============================================================================

/// Estado de una sesión de mentoría
///
/// El cliente nunca inventa transiciones, solo las solicita.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Los cinco estados en el orden en que se muestran los filtros
    pub const ALL: [SessionStatus; 5] = [
        SessionStatus::Pending,
        SessionStatus::Accepted,
        SessionStatus::Rejected,
        SessionStatus::Completed,
        SessionStatus::Cancelled,
    ];

    /// Código tal como lo espera el backend (`?newStatus=`)
    pub fn code(self) -> &'static str {
        match self {
            SessionStatus::Pending => "PENDING",
            SessionStatus::Accepted => "ACCEPTED",
            SessionStatus::Rejected => "REJECTED",
            SessionStatus::Completed => "COMPLETED",
            SessionStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Pending => "Pendente",
            SessionStatus::Accepted => "Aceito",
            SessionStatus::Rejected => "Rejeitado",
            SessionStatus::Completed => "Concluído",
            SessionStatus::Cancelled => "Cancelado",
        }
    }

    /// Clase CSS del badge (`status-pending`, ...)
    pub fn css_class(self) -> String {
        format!("status-{}", self.code().to_lowercase())
    }

    /// REJECTED, COMPLETED y CANCELLED no admiten más transiciones
    pub fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Tabla de transiciones, independiente del rol
    pub fn next_statuses(self) -> &'static [SessionStatus] {
        match self {
            SessionStatus::Pending => &[
                SessionStatus::Accepted,
                SessionStatus::Rejected,
                SessionStatus::Cancelled,
            ],
            SessionStatus::Accepted => &[SessionStatus::Completed, SessionStatus::Cancelled],
            SessionStatus::Rejected | SessionStatus::Completed | SessionStatus::Cancelled => &[],
        }
    }

    /// Estados que `role` puede solicitar desde `self`
    pub fn transitions_for(self, role: Role) -> &'static [SessionStatus] {
        match role {
            Role::Mentor => self.next_statuses(),
            Role::Mentorado => &[],
        }
    }

    pub fn can_transition(self, role: Role, target: SessionStatus) -> bool {
        self.transitions_for(role).contains(&target)
    }
}

/// Sesión de mentoría tal como la devuelve el historial
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipSession {
    pub id: i64,
    pub status: SessionStatus,
    #[serde(default)]
    pub mentor_id: Option<i64>,
    #[serde(default)]
    pub mentored_id: Option<i64>,
    #[serde(default)]
    pub mentor_name: Option<String>,
    #[serde(default)]
    pub mentored_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl MentorshipSession {
    /// Nombre de la otra parte según el rol de quien mira
    pub fn counterpart_name(&self, viewer: Role) -> Option<&str> {
        match viewer {
            Role::Mentor => self.mentored_name.as_deref(),
            Role::Mentorado => self.mentor_name.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_transitions() {
        assert_eq!(
            SessionStatus::Pending.next_statuses(),
            &[SessionStatus::Accepted, SessionStatus::Rejected, SessionStatus::Cancelled]
        );
    }

    #[test]
    fn test_accepted_transitions() {
        assert_eq!(
            SessionStatus::Accepted.next_statuses(),
            &[SessionStatus::Completed, SessionStatus::Cancelled]
        );
    }

    #[test]
    fn test_terminal_statuses_have_no_transitions() {
        for status in [SessionStatus::Rejected, SessionStatus::Completed, SessionStatus::Cancelled] {
            assert!(status.next_statuses().is_empty(), "{:?}", status);
            assert!(status.is_terminal());
        }
        assert!(!SessionStatus::Pending.is_terminal());
        assert!(!SessionStatus::Accepted.is_terminal());
    }

    #[test]
    fn test_mentorado_never_gets_transitions() {
        for status in SessionStatus::ALL {
            assert!(status.transitions_for(Role::Mentorado).is_empty());
        }
        assert!(!SessionStatus::Pending.can_transition(Role::Mentorado, SessionStatus::Accepted));
        assert!(SessionStatus::Pending.can_transition(Role::Mentor, SessionStatus::Accepted));
        assert!(!SessionStatus::Pending.can_transition(Role::Mentor, SessionStatus::Completed));
    }

    #[test]
    fn test_code_roundtrip_and_css() {
        for status in SessionStatus::ALL {
            assert_eq!(SessionStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(SessionStatus::from_code("DONE"), None);
        assert_eq!(SessionStatus::Cancelled.css_class(), "status-cancelled");
    }

    #[test]
    fn test_session_deserializes_with_missing_optionals() {
        let json = r#"{"id":12,"status":"ACCEPTED","mentorId":4}"#;
        let session: MentorshipSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, 12);
        assert_eq!(session.status, SessionStatus::Accepted);
        assert_eq!(session.mentor_id, Some(4));
        assert_eq!(session.mentored_id, None);
    }
}
