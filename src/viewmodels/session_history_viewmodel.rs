// ============================================================================
// SESSION HISTORY VIEWMODEL - Flujos asíncronos del histórico
// ============================================================================
// Toda decisión vive en `SessionHistoryState`; aquí solo se lanza la red y
// se entrega el resultado.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use crate::config::CONFIG;
use crate::error::{ReviewSubmitError, StatusUpdateError};
use crate::models::SessionStatus;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

pub struct SessionHistoryViewModel {
    state: AppState,
}

impl SessionHistoryViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    fn api(&self) -> ApiClient {
        ApiClient::new(self.state.auth.get_token())
    }

    /// Sesiones + avaliações ya hechas (estas últimas, sin bloquear)
    pub fn load(&self) {
        self.state.history.borrow_mut().begin_load();
        self.state.notify_subscribers();

        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let sessions = api.session_history().await;
            if let Err(e) = &sessions {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            let count = sessions.as_ref().map(Vec::len).unwrap_or(0);
            state.history.borrow_mut().set_sessions(sessions);
            log::info!("📋 [HISTORICO] {} sesiones cargadas", count);
            state.notify_subscribers();

            let reviewed = api.created_reviews().await;
            state.history.borrow_mut().set_reviewed(reviewed);
            state.notify_subscribers();
        });
    }

    /// Solo la lista de sesiones (tras un cambio de estado)
    fn reload_sessions(&self) {
        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let sessions = api.session_history().await;
            if let Err(e) = &sessions {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            state.history.borrow_mut().set_sessions(sessions);
            state.notify_subscribers();
        });
    }

    pub fn toggle_expansion(&self, session_id: i64) {
        let user = self.state.auth.get_current_user();
        self.state.history.borrow_mut().toggle_expansion(session_id, user.as_ref());
        self.state.notify_subscribers();
    }

    pub fn toggle_filter(&self, status: SessionStatus) {
        self.state.history.borrow_mut().toggle_filter(status);
        self.state.notify_subscribers();
    }

    pub fn set_all_filters(&self, enabled: bool) {
        self.state.history.borrow_mut().set_all_filters(enabled);
        self.state.notify_subscribers();
    }

    pub fn toggle_filters_panel(&self) {
        self.state.history.borrow_mut().toggle_filters_panel();
        self.state.notify_subscribers();
    }

    pub fn set_score(&self, score: i32) {
        self.state.history.borrow_mut().set_score(score);
        self.state.notify_subscribers();
    }

    /// Sin re-render: el textarea conserva el foco
    pub fn set_comment(&self, comment: String) {
        self.state.history.borrow_mut().set_comment(comment);
    }

    pub fn set_new_status(&self, status: Option<SessionStatus>) {
        self.state.history.borrow_mut().set_new_status(status);
    }

    pub fn submit_review(&self, session_id: i64) {
        let Some(user) = self.state.auth.get_current_user() else {
            return;
        };
        let begun = self.state.history.borrow_mut().begin_review(session_id, &user);
        let new_review = match begun {
            Ok(review) => review,
            Err(ReviewSubmitError::Busy) => return,
            Err(e) => {
                log::warn!("⚠️ [AVALIACAO] Sesión {} rechazada localmente: {}", session_id, e);
                self.state.notify_subscribers();
                return;
            }
        };
        self.state.notify_subscribers();

        log::info!("⭐ [AVALIACAO] Enviando avaliação de la sesión {}", session_id);
        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let result = api.create_review(&new_review).await;
            if let Err(e) = &result {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            let generation = state.history.borrow_mut().complete_review(session_id, result);
            if let Some(generation) = generation {
                log::info!("✅ [AVALIACAO] Sesión {} avaliada", session_id);
                schedule_success_clear(&state, generation);
            }
            state.notify_subscribers();
        });
    }

    pub fn update_status(&self, session_id: i64) {
        let Some(user) = self.state.auth.get_current_user() else {
            return;
        };
        let begun = self.state.history.borrow_mut().begin_status_update(session_id, &user);
        let new_status = match begun {
            Ok(status) => status,
            Err(StatusUpdateError::Busy) => return,
            Err(e) => {
                log::warn!("⚠️ [STATUS] Cambio rechazado localmente: {}", e);
                self.state.notify_subscribers();
                return;
            }
        };
        self.state.notify_subscribers();

        let state = self.state.clone();
        let api = self.api();
        spawn_local(async move {
            let result = api.update_session_status(session_id, new_status).await;
            if let Err(e) = &result {
                if AuthViewModel::new(&state).handle_unauthorized(e) {
                    return;
                }
            }
            let generation = state.history.borrow_mut().complete_status_update(session_id, result);
            state.notify_subscribers();
            if let Some(generation) = generation {
                schedule_success_clear(&state, generation);
                // El estado real siempre viene del servidor
                SessionHistoryViewModel::new(&state).reload_sessions();
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.state.history.borrow_mut().dismiss_error();
        self.state.notify_subscribers();
    }
}

fn schedule_success_clear(state: &AppState, generation: u64) {
    let state = state.clone();
    Timeout::new(CONFIG.success_message_ms, move || {
        state.history.borrow_mut().clear_success(generation);
        state.notify_subscribers();
    })
    .forget();
}
