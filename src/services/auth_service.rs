// ============================================================================
// AUTH SERVICE - Token bearer y usuario actual en localStorage
// ============================================================================

use crate::error::ApiError;
use crate::models::CurrentUser;
use crate::services::api_client::ApiClient;
use crate::utils::{
    load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage,
    CURRENT_USER_STORAGE_KEY, LAST_SCREEN_STORAGE_KEY, TOKEN_STORAGE_KEY,
};

pub fn load_token() -> Option<String> {
    load_raw(TOKEN_STORAGE_KEY).filter(|t| !t.trim().is_empty())
}

pub fn load_cached_user() -> Option<CurrentUser> {
    load_from_storage::<CurrentUser>(CURRENT_USER_STORAGE_KEY)
}

/// Login completo: token → guardar → cargar usuario actual
pub async fn perform_login(email: &str, password: &str) -> Result<(String, CurrentUser), ApiError> {
    let login = ApiClient::new(None).login(email, password).await?;
    let token = login.token;

    if let Err(e) = save_raw(TOKEN_STORAGE_KEY, &token) {
        log::error!("❌ [AUTH] Error guardando token: {}", e);
    }

    let user = ApiClient::new(Some(token.clone())).current_user().await?;
    if let Err(e) = save_to_storage(CURRENT_USER_STORAGE_KEY, &user) {
        log::error!("❌ [AUTH] Error guardando usuario: {}", e);
    }

    log::info!("✅ [AUTH] Login OK: usuario {} ({})", user.id, user.role.label());
    Ok((token, user))
}

/// Refrescar usuario actual con el token guardado
pub async fn refresh_current_user(token: &str) -> Result<CurrentUser, ApiError> {
    let user = ApiClient::new(Some(token.to_string())).current_user().await?;
    if let Err(e) = save_to_storage(CURRENT_USER_STORAGE_KEY, &user) {
        log::warn!("⚠️ [AUTH] No se pudo cachear el usuario: {}", e);
    }
    Ok(user)
}

/// Logout - limpiar todo
pub fn clear_credentials() {
    for key in [TOKEN_STORAGE_KEY, CURRENT_USER_STORAGE_KEY, LAST_SCREEN_STORAGE_KEY] {
        if let Err(e) = remove_from_storage(key) {
            log::warn!("⚠️ [AUTH] Error limpiando {}: {}", key, e);
        }
    }
    log::info!("👋 [AUTH] Credenciales eliminadas");
}
