// ============================================================================
// AUTH VIEWMODEL - Login / logout / restauración del usuario actual
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::error::ApiError;
use crate::services::auth_service;
use crate::state::{AppState, Screen};

pub struct AuthViewModel {
    state: AppState,
}

impl AuthViewModel {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    pub fn set_email(&self, email: String) {
        self.state.login_form.borrow_mut().email = email;
    }

    pub fn set_password(&self, password: String) {
        self.state.login_form.borrow_mut().password = password;
    }

    pub fn login(&self) {
        let credentials = self.state.login_form.borrow_mut().begin_submit();
        self.state.notify_subscribers();
        let Some((email, password)) = credentials else {
            return;
        };

        log::info!("🔐 [AUTH] Iniciando login...");
        let state = self.state.clone();
        spawn_local(async move {
            match auth_service::perform_login(&email, &password).await {
                Ok((token, user)) => {
                    state.auth.set_token(Some(token));
                    state.auth.set_current_user(Some(user));
                    state.login_form.borrow_mut().reset();
                    state.set_screen(Screen::Home);
                }
                Err(e) => {
                    log::error!("❌ [AUTH] Login falló: {}", e);
                    auth_service::clear_credentials();
                    state.auth.logout();
                    let message = match e {
                        ApiError::Http { status: 401, .. } | ApiError::Http { status: 403, .. } => {
                            "E-mail ou senha inválidos.".to_string()
                        }
                        other => other.to_string(),
                    };
                    state.login_form.borrow_mut().fail(message);
                }
            }
            state.notify_subscribers();
        });
    }

    pub fn logout(&self) {
        auth_service::clear_credentials();
        self.state.auth.logout();
        self.state.reset_user_data();
        self.state.set_screen(Screen::Login);
        self.state.notify_subscribers();
    }

    /// Con token pero sin usuario en caché: pedir `/auth/me` otra vez
    pub fn restore(&self) {
        let Some(token) = self.state.auth.get_token() else {
            return;
        };
        if self.state.auth.get_current_user().is_some() {
            return;
        }

        log::info!("🔄 [AUTH] Restaurando usuario actual...");
        let state = self.state.clone();
        spawn_local(async move {
            match auth_service::refresh_current_user(&token).await {
                Ok(user) => {
                    state.auth.set_current_user(Some(user));
                    state.set_screen(Screen::Home);
                }
                Err(e) => {
                    log::warn!("⚠️ [AUTH] Token inválido, cerrando sesión: {}", e);
                    AuthViewModel::new(&state).logout();
                }
            }
            state.notify_subscribers();
        });
    }

    /// Un 401 en cualquier petición autenticada cierra la sesión.
    /// Devuelve `true` si se cerró.
    pub fn handle_unauthorized(&self, error: &ApiError) -> bool {
        if !error.is_unauthorized() {
            return false;
        }
        log::warn!("🔒 [AUTH] Token rechazado por el servidor");
        self.logout();
        true
    }
}
