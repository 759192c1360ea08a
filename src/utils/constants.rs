/// Clave de localStorage del token bearer
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Clave de localStorage del usuario actual (id + rol)
pub const CURRENT_USER_STORAGE_KEY: &str = "current_user";

/// Última pantalla visitada (se restaura al recargar)
pub const LAST_SCREEN_STORAGE_KEY: &str = "last_screen";

/// Valores por defecto del formulario de avaliação
pub const DEFAULT_REVIEW_SCORE: i32 = 5;
