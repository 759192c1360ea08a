// ============================================================================
// CONFIG - Configuración en tiempo de compilación (.env vía build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_DEV: &str = "http://localhost:8080";
const DEFAULT_BACKEND_PROD: &str = "https://api.mentoria.example.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub files_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Retardo del buscador de mentores tras la última tecla
    pub search_debounce_ms: u32,
    /// Tiempo que el mensaje de éxito queda visible
    pub success_message_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_DEV.to_string(),
            backend_url_production: DEFAULT_BACKEND_PROD.to_string(),
            files_base_url: DEFAULT_BACKEND_DEV.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            search_debounce_ms: 500,
            success_message_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            files_base_url: option_env!("FILES_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.files_base_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            search_debounce_ms: parse_or(option_env!("SEARCH_DEBOUNCE_MS"), defaults.search_debounce_ms),
            success_message_ms: parse_or(option_env!("SUCCESS_MESSAGE_MS"), defaults.success_message_ms),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_DEV);

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_PROD);

        config.environment = "staging".to_string();
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_DEV);
    }

    #[test]
    fn test_defaults_match_ui_timings() {
        let config = AppConfig::default();
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.success_message_ms, 5000);
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or::<u32>(Some("abc"), 7), 7);
        assert_eq!(parse_or::<u32>(Some(" 250 "), 7), 250);
        assert!(!parse_or::<bool>(Some("false"), true));
        assert_eq!(parse_or::<u32>(None, 3), 3);
    }

    #[test]
    fn test_log_level_drops_to_warn_when_disabled() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
