// ============================================================================
// STATUS FILTER - Proyección de la lista de sesiones por estado
// ============================================================================

use crate::models::{MentorshipSession, SessionStatus};

/// Un booleano por estado; todos activos por defecto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    enabled: [bool; SessionStatus::ALL.len()],
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self {
            enabled: [true; SessionStatus::ALL.len()],
        }
    }
}

impl StatusFilter {
    pub fn is_enabled(&self, status: SessionStatus) -> bool {
        self.enabled[status as usize]
    }

    pub fn toggle(&mut self, status: SessionStatus) {
        let slot = &mut self.enabled[status as usize];
        *slot = !*slot;
    }

    /// "Selecionar todos" / "Limpar"
    pub fn set_all(&mut self, enabled: bool) {
        self.enabled = [enabled; SessionStatus::ALL.len()];
    }

    pub fn all_selected(&self) -> bool {
        self.enabled.iter().all(|e| *e)
    }

    pub fn none_selected(&self) -> bool {
        self.enabled.iter().all(|e| !*e)
    }

    /// Sesiones visibles, en el orden original, recalculado sobre la lista completa
    pub fn apply<'a>(&self, sessions: &'a [MentorshipSession]) -> Vec<&'a MentorshipSession> {
        sessions.iter().filter(|s| self.is_enabled(s.status)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: i64, status: SessionStatus) -> MentorshipSession {
        MentorshipSession {
            id,
            status,
            mentor_id: None,
            mentored_id: None,
            mentor_name: None,
            mentored_name: None,
            date: None,
            time: None,
            topic: None,
        }
    }

    fn sample() -> Vec<MentorshipSession> {
        vec![
            session(1, SessionStatus::Pending),
            session(2, SessionStatus::Completed),
            session(3, SessionStatus::Completed),
            session(4, SessionStatus::Cancelled),
        ]
    }

    #[test]
    fn test_default_shows_everything() {
        let filter = StatusFilter::default();
        let sessions = sample();
        assert!(filter.all_selected());
        assert_eq!(filter.apply(&sessions).len(), 4);
    }

    #[test]
    fn test_only_completed_keeps_relative_order() {
        let mut filter = StatusFilter::default();
        filter.set_all(false);
        filter.toggle(SessionStatus::Completed);

        let sessions = sample();
        let ids: Vec<i64> = filter.apply(&sessions).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_select_all_then_none() {
        let sessions = sample();
        let mut filter = StatusFilter::default();
        filter.toggle(SessionStatus::Pending);
        assert!(!filter.all_selected());

        filter.set_all(true);
        let ids: Vec<i64> = filter.apply(&sessions).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        filter.set_all(false);
        assert!(filter.none_selected());
        assert!(filter.apply(&sessions).is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut filter = StatusFilter::default();
        filter.toggle(SessionStatus::Rejected);
        assert!(!filter.is_enabled(SessionStatus::Rejected));
        filter.toggle(SessionStatus::Rejected);
        assert_eq!(filter, StatusFilter::default());
    }
}
