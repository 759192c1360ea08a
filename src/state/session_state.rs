// ============================================================================
// SESSION HISTORY STATE - Histórico de sesiones + avaliação + cambio de estado
// ============================================================================
// Estado puro (sin DOM ni red). Los flujos asíncronos viven en
// `viewmodels::session_history_viewmodel` y solo llaman a begin_*/complete_*.
// ============================================================================

use crate::error::{ApiError, ReviewSubmitError, StatusUpdateError};
use crate::models::{CurrentUser, MentorshipSession, NewReview, Review, SessionStatus};
use crate::viewmodels::eligibility::{self, ReviewedSessions};
use crate::viewmodels::review_form::{ReviewForm, StatusUpdateForm};
use crate::viewmodels::status_filter::StatusFilter;

pub const REVIEW_SUCCESS_MESSAGE: &str = "Avaliação enviada com sucesso!";
pub const STATUS_SUCCESS_MESSAGE: &str = "Status da sessão atualizado com sucesso!";

#[derive(Debug, Clone, Default)]
pub struct SessionHistoryState {
    pub sessions: Vec<MentorshipSession>,
    pub reviewed: ReviewedSessions,
    pub filter: StatusFilter,
    pub show_filters: bool,

    /// Como mucho una sesión desplegada a la vez
    pub expanded: Option<i64>,

    pub review_form: ReviewForm,
    pub status_form: StatusUpdateForm,

    pub loading: bool,
    pub submitting_review: bool,
    pub updating_status: bool,

    pub load_error: Option<String>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    success_generation: u64,
}

impl SessionHistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Carga
    // ------------------------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    pub fn set_sessions(&mut self, result: Result<Vec<MentorshipSession>, ApiError>) {
        self.loading = false;
        match result {
            Ok(sessions) => {
                self.sessions = sessions;
                // El panel abierto debe seguir apuntando a una sesión existente
                if let Some(id) = self.expanded {
                    if !self.sessions.iter().any(|s| s.id == id) {
                        self.collapse();
                    }
                }
            }
            Err(e) => {
                log::error!("❌ [HISTORICO] Error cargando sesiones: {}", e);
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Un fallo aquí no es fatal: se mantiene el conjunto actual
    pub fn set_reviewed(&mut self, result: Result<Vec<Review>, ApiError>) {
        match result {
            Ok(reviews) => {
                for review in &reviews {
                    self.reviewed.insert(review.session_id);
                }
            }
            Err(e) => {
                log::warn!("⚠️ [HISTORICO] No se pudieron cargar las avaliações hechas: {}", e);
            }
        }
    }

    pub fn session(&self, id: i64) -> Option<&MentorshipSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn visible_sessions(&self) -> Vec<&MentorshipSession> {
        self.filter.apply(&self.sessions)
    }

    // ------------------------------------------------------------------------
    // Filtros
    // ------------------------------------------------------------------------

    pub fn toggle_filter(&mut self, status: SessionStatus) {
        self.filter.toggle(status);
    }

    pub fn set_all_filters(&mut self, enabled: bool) {
        self.filter.set_all(enabled);
    }

    pub fn toggle_filters_panel(&mut self) {
        self.show_filters = !self.show_filters;
    }

    // ------------------------------------------------------------------------
    // Despliegue
    // ------------------------------------------------------------------------

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded == Some(id)
    }

    pub fn can_expand(&self, session: &MentorshipSession, user: Option<&CurrentUser>) -> bool {
        eligibility::can_expand(session, user, &self.reviewed)
    }

    /// Click en una fila: abre, cierra o cambia de sesión. Los formularios
    /// se reinician en cada cambio.
    pub fn toggle_expansion(&mut self, id: i64, user: Option<&CurrentUser>) {
        if self.is_expanded(id) {
            self.collapse();
            return;
        }
        let expandable = self.session(id).is_some_and(|s| self.can_expand(s, user));
        if !expandable {
            return;
        }
        self.expanded = Some(id);
        self.reset_forms();
        self.error_message = None;
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
        self.reset_forms();
    }

    /// Otro panel abierto mientras tanto sigue intacto
    fn collapse_if(&mut self, session_id: i64) {
        if self.is_expanded(session_id) {
            self.collapse();
        }
    }

    fn reset_forms(&mut self) {
        self.review_form = ReviewForm::default();
        self.status_form = StatusUpdateForm::default();
    }

    // ------------------------------------------------------------------------
    // Avaliação
    // ------------------------------------------------------------------------

    pub fn set_score(&mut self, score: i32) {
        self.review_form.score = score;
    }

    pub fn set_comment(&mut self, comment: String) {
        self.review_form.comment = comment;
    }

    /// Comprueba todo antes de enviar y marca la avaliação como en curso
    pub fn begin_review(&mut self, session_id: i64, user: &CurrentUser) -> Result<NewReview, ReviewSubmitError> {
        if self.submitting_review {
            return Err(ReviewSubmitError::Busy);
        }
        let result = self.prepare_review(session_id, user);
        match &result {
            Ok(_) => {
                self.submitting_review = true;
                self.error_message = None;
                self.success_message = None;
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
        result
    }

    fn prepare_review(&self, session_id: i64, user: &CurrentUser) -> Result<NewReview, ReviewSubmitError> {
        let session = self.session(session_id).ok_or(ReviewSubmitError::NotEligible)?;
        if !eligibility::can_review(session, &self.reviewed) {
            return Err(ReviewSubmitError::NotEligible);
        }
        Ok(self.review_form.to_review(session_id, user.role)?)
    }

    /// Resultado del POST. Devuelve la generación del mensaje de éxito
    /// para poder limpiarlo más tarde con `clear_success`.
    pub fn complete_review(&mut self, session_id: i64, result: Result<Review, ApiError>) -> Option<u64> {
        self.submitting_review = false;
        match result {
            Ok(_) => {
                self.reviewed.insert(session_id);
                self.collapse_if(session_id);
                self.error_message = None;
                Some(self.show_success(REVIEW_SUCCESS_MESSAGE))
            }
            Err(e) => {
                let err = ReviewSubmitError::from(e);
                log::error!("❌ [AVALIACAO] Sesión {}: {}", session_id, err);
                self.error_message = Some(err.to_string());
                None
            }
        }
    }

    // ------------------------------------------------------------------------
    // Cambio de estado
    // ------------------------------------------------------------------------

    pub fn set_new_status(&mut self, status: Option<SessionStatus>) {
        self.status_form.new_status = status;
    }

    pub fn begin_status_update(
        &mut self,
        session_id: i64,
        user: &CurrentUser,
    ) -> Result<SessionStatus, StatusUpdateError> {
        if self.updating_status {
            return Err(StatusUpdateError::Busy);
        }
        let result = self.prepare_status_update(session_id, user);
        match &result {
            Ok(_) => {
                self.updating_status = true;
                self.error_message = None;
                self.success_message = None;
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
        result
    }

    fn prepare_status_update(&self, session_id: i64, user: &CurrentUser) -> Result<SessionStatus, StatusUpdateError> {
        let target = self.status_form.new_status.ok_or(StatusUpdateError::NoStatusSelected)?;
        let session = self.session(session_id).ok_or(StatusUpdateError::NotAllowed)?;
        if !session.status.can_transition(user.role, target) {
            return Err(StatusUpdateError::NotAllowed);
        }
        Ok(target)
    }

    /// `Some(generación)` si hubo éxito; el llamador debe recargar la lista
    pub fn complete_status_update(&mut self, session_id: i64, result: Result<(), ApiError>) -> Option<u64> {
        self.updating_status = false;
        match result {
            Ok(()) => {
                self.collapse_if(session_id);
                Some(self.show_success(STATUS_SUCCESS_MESSAGE))
            }
            Err(e) => {
                let err = StatusUpdateError::from(e);
                log::error!("❌ [STATUS] {}", err);
                self.error_message = Some(err.to_string());
                None
            }
        }
    }

    // ------------------------------------------------------------------------
    // Mensajes
    // ------------------------------------------------------------------------

    fn show_success(&mut self, message: &str) -> u64 {
        self.success_generation += 1;
        self.success_message = Some(message.to_string());
        self.success_generation
    }

    /// Solo borra el mensaje si no ha sido reemplazado por otro más reciente
    pub fn clear_success(&mut self, generation: u64) {
        if self.success_generation == generation {
            self.success_message = None;
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn session(id: i64, status: SessionStatus) -> MentorshipSession {
        MentorshipSession {
            id,
            status,
            mentor_id: Some(1),
            mentored_id: Some(2),
            mentor_name: Some("Ana Souza".to_string()),
            mentored_name: Some("Bruno Lima".to_string()),
            date: None,
            time: None,
            topic: None,
        }
    }

    fn mentor() -> CurrentUser {
        CurrentUser { id: 1, email: None, role: Role::Mentor }
    }

    fn mentorado() -> CurrentUser {
        CurrentUser { id: 2, email: None, role: Role::Mentorado }
    }

    fn review(session_id: i64) -> Review {
        Review {
            id: 99,
            score: 5,
            comment: String::new(),
            session_id,
            reviewer_role: Role::Mentorado,
            created_at: None,
            mentor_id: None,
            mentored_id: None,
        }
    }

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            status_text: "x".to_string(),
            message: None,
        }
    }

    fn loaded(sessions: Vec<MentorshipSession>) -> SessionHistoryState {
        let mut state = SessionHistoryState::new();
        state.begin_load();
        state.set_sessions(Ok(sessions));
        state
    }

    #[test]
    fn test_successful_review_flow() {
        let user = mentorado();
        let mut state = loaded(vec![session(10, SessionStatus::Completed)]);

        state.toggle_expansion(10, Some(&user));
        assert!(state.is_expanded(10));
        state.set_score(4);
        state.set_comment("Ótima".to_string());

        let new_review = state.begin_review(10, &user).unwrap();
        assert_eq!(new_review.score, 4);
        assert_eq!(new_review.comment, "Ótima");
        assert!(state.submitting_review);

        let generation = state.complete_review(10, Ok(review(10))).unwrap();
        assert!(state.reviewed.contains(10));
        assert_eq!(state.expanded, None);
        assert_eq!(state.review_form, ReviewForm::default());
        assert_eq!(state.success_message.as_deref(), Some(REVIEW_SUCCESS_MESSAGE));
        assert!(!state.submitting_review);

        // Sin acciones disponibles: ya no se puede desplegar
        state.toggle_expansion(10, Some(&user));
        assert_eq!(state.expanded, None);

        state.clear_success(generation);
        assert_eq!(state.success_message, None);
    }

    #[test]
    fn test_conflict_keeps_panel_and_set() {
        let user = mentorado();
        let mut state = loaded(vec![session(10, SessionStatus::Completed)]);
        state.toggle_expansion(10, Some(&user));
        state.set_comment("texto".to_string());

        state.begin_review(10, &user).unwrap();
        assert_eq!(state.complete_review(10, Err(http(409))), None);

        assert!(!state.reviewed.contains(10));
        assert!(state.is_expanded(10));
        assert_eq!(state.review_form.comment, "texto");
        assert_eq!(
            state.error_message.as_deref(),
            Some(ReviewSubmitError::AlreadyReviewed.to_string().as_str())
        );
    }

    #[test]
    fn test_busy_guard_sends_once() {
        let user = mentorado();
        let mut state = loaded(vec![session(10, SessionStatus::Completed)]);
        assert!(state.begin_review(10, &user).is_ok());
        assert_eq!(state.begin_review(10, &user), Err(ReviewSubmitError::Busy));
    }

    #[test]
    fn test_review_rejected_for_ineligible_sessions() {
        let user = mentorado();
        let mut state = loaded(vec![session(1, SessionStatus::Pending), session(2, SessionStatus::Completed)]);
        state.reviewed.insert(2);

        assert_eq!(state.begin_review(1, &user), Err(ReviewSubmitError::NotEligible));
        assert_eq!(state.begin_review(2, &user), Err(ReviewSubmitError::NotEligible));
        assert_eq!(state.begin_review(3, &user), Err(ReviewSubmitError::NotEligible));
        assert!(!state.submitting_review);
    }

    #[test]
    fn test_invalid_form_never_sends() {
        let user = mentorado();
        let mut state = loaded(vec![session(10, SessionStatus::Completed)]);
        state.set_score(0);
        assert!(matches!(state.begin_review(10, &user), Err(ReviewSubmitError::Invalid(_))));
        assert!(!state.submitting_review);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_reviewed_fetch_failure_is_not_fatal() {
        let mut state = loaded(vec![session(10, SessionStatus::Completed)]);
        state.set_reviewed(Ok(vec![review(10)]));
        state.set_reviewed(Err(ApiError::Network("offline".to_string())));
        assert!(state.reviewed.contains(10));
        assert_eq!(state.load_error, None);
    }

    #[test]
    fn test_single_expanded_session() {
        let user = mentor();
        let mut state = loaded(vec![session(1, SessionStatus::Pending), session(2, SessionStatus::Accepted)]);
        state.toggle_expansion(1, Some(&user));
        state.set_new_status(Some(SessionStatus::Accepted));
        state.toggle_expansion(2, Some(&user));
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(1));
        assert_eq!(state.status_form.new_status, None);

        state.toggle_expansion(2, Some(&user));
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_status_update_checks_table() {
        let user = mentor();
        let mut state = loaded(vec![session(1, SessionStatus::Pending), session(2, SessionStatus::Completed)]);

        assert_eq!(state.begin_status_update(1, &user), Err(StatusUpdateError::NoStatusSelected));

        state.set_new_status(Some(SessionStatus::Completed));
        assert_eq!(state.begin_status_update(1, &user), Err(StatusUpdateError::NotAllowed));

        state.set_new_status(Some(SessionStatus::Accepted));
        assert_eq!(state.begin_status_update(1, &mentorado()), Err(StatusUpdateError::NotAllowed));
        assert_eq!(state.begin_status_update(1, &user), Ok(SessionStatus::Accepted));
        assert_eq!(state.begin_status_update(1, &user), Err(StatusUpdateError::Busy));
    }

    #[test]
    fn test_status_update_success_and_failure() {
        let user = mentor();
        let mut state = loaded(vec![session(1, SessionStatus::Accepted)]);
        state.toggle_expansion(1, Some(&user));
        state.set_new_status(Some(SessionStatus::Completed));

        state.begin_status_update(1, &user).unwrap();
        assert!(state.complete_status_update(1, Err(http(500))).is_none());
        assert!(state.is_expanded(1));
        assert!(state.error_message.is_some());
        // El estado local nunca cambia sin recarga
        assert_eq!(state.sessions[0].status, SessionStatus::Accepted);

        state.begin_status_update(1, &user).unwrap();
        assert!(state.complete_status_update(1, Ok(())).is_some());
        assert_eq!(state.expanded, None);
        assert_eq!(state.success_message.as_deref(), Some(STATUS_SUCCESS_MESSAGE));
    }

    #[test]
    fn test_stale_success_timer_does_not_clear_newer_message() {
        let user = mentorado();
        let mut state = loaded(vec![session(1, SessionStatus::Completed), session(2, SessionStatus::Completed)]);

        state.begin_review(1, &user).unwrap();
        let first = state.complete_review(1, Ok(review(1))).unwrap();
        state.begin_review(2, &user).unwrap();
        let second = state.complete_review(2, Ok(review(2))).unwrap();

        state.clear_success(first);
        assert!(state.success_message.is_some());
        state.clear_success(second);
        assert!(state.success_message.is_none());
    }

    #[test]
    fn test_reload_collapses_missing_session() {
        let user = mentor();
        let mut state = loaded(vec![session(1, SessionStatus::Pending)]);
        state.toggle_expansion(1, Some(&user));
        state.set_sessions(Ok(vec![session(2, SessionStatus::Pending)]));
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_review_success_keeps_other_open_panel() {
        let user = mentorado();
        let mut state = loaded(vec![session(10, SessionStatus::Completed), session(11, SessionStatus::Completed)]);

        state.toggle_expansion(10, Some(&user));
        state.begin_review(10, &user).unwrap();

        state.toggle_expansion(11, Some(&user));
        state.set_comment("rascunho da 11".to_string());

        assert!(state.complete_review(10, Ok(review(10))).is_some());
        assert!(state.reviewed.contains(10));
        assert_eq!(state.expanded, Some(11));
        assert_eq!(state.review_form.comment, "rascunho da 11");
    }

    #[test]
    fn test_status_success_keeps_other_open_panel() {
        let user = mentor();
        let mut state = loaded(vec![session(1, SessionStatus::Pending), session(2, SessionStatus::Accepted)]);

        state.toggle_expansion(1, Some(&user));
        state.set_new_status(Some(SessionStatus::Accepted));
        state.begin_status_update(1, &user).unwrap();

        state.toggle_expansion(2, Some(&user));
        state.set_new_status(Some(SessionStatus::Completed));

        assert!(state.complete_status_update(1, Ok(())).is_some());
        assert_eq!(state.expanded, Some(2));
        assert_eq!(state.status_form.new_status, Some(SessionStatus::Completed));
    }
}
