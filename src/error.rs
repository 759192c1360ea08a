// ============================================================================
// ERRORES - Taxonomía de fallos de la UI
// ============================================================================
// Los mensajes (Display) son los que ve el usuario.
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

/// Error de la capa HTTP (services)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Erro de rede: {0}")]
    Network(String),

    #[error("Erro ao montar a requisição: {0}")]
    Serialization(String),

    #[error("Resposta inválida do servidor: {0}")]
    Parse(String),

    /// Respuesta no-2xx; `message` viene del cuerpo si existe
    #[error("{}", http_message(.status, .status_text, .message))]
    Http {
        status: u16,
        status_text: String,
        message: Option<String>,
    },
}

fn http_message(status: &u16, status_text: &str, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Erro {}: {}", status, status_text),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Construir error HTTP a partir del cuerpo crudo de la respuesta
    ///
    /// JSON con `message` → ese mensaje; texto no vacío → el texto; si no, nada.
    pub fn from_http(status: u16, status_text: &str, body: &str) -> Self {
        let body = body.trim();
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.message.filter(|m| !m.trim().is_empty()),
            Err(_) if !body.is_empty() => Some(body.to_string()),
            Err(_) => None,
        };
        ApiError::Http {
            status,
            status_text: status_text.to_string(),
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Validación local del formulario de avaliação
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewFormError {
    #[error("A nota deve estar entre 1 e 5 (recebido {0}).")]
    ScoreOutOfRange(i32),

    #[error("O comentário deve ter no máximo 600 caracteres (atual: {0}).")]
    CommentTooLong(usize),
}

/// Fallo al enviar una avaliação
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewSubmitError {
    #[error(transparent)]
    Invalid(#[from] ReviewFormError),

    #[error("Esta sessão ainda não pode ser avaliada.")]
    NotEligible,

    #[error("Já existe uma avaliação sendo enviada.")]
    Busy,

    #[error("Você já avaliou esta sessão. Cada sessão pode ser avaliada apenas uma vez.")]
    AlreadyReviewed,

    #[error("{}", .0.as_deref().unwrap_or("Dados da avaliação inválidos. Verifique os campos e tente novamente."))]
    Validation(Option<String>),

    #[error("Você não tem permissão para avaliar esta sessão.")]
    Forbidden,

    #[error(transparent)]
    Server(ApiError),
}

impl From<ApiError> for ReviewSubmitError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http { status: 409, .. } => ReviewSubmitError::AlreadyReviewed,
            ApiError::Http { status: 400, message, .. } => ReviewSubmitError::Validation(message),
            ApiError::Http { status: 403, .. } => ReviewSubmitError::Forbidden,
            other => ReviewSubmitError::Server(other),
        }
    }
}

/// Fallo al solicitar un cambio de estado
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatusUpdateError {
    #[error("Selecione o novo status da sessão.")]
    NoStatusSelected,

    #[error("Esta transição de status não é permitida.")]
    NotAllowed,

    #[error("Já existe uma atualização de status em andamento.")]
    Busy,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validación local del formulario de material
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialFormError {
    #[error("O título é obrigatório.")]
    MissingTitle,

    #[error("O título deve ter no máximo 180 caracteres.")]
    TitleTooLong,

    #[error("Selecione o tipo do material.")]
    MissingType,

    #[error("Informe a URL do link.")]
    MissingUrl,

    #[error("Selecione ao menos uma área de interesse.")]
    MissingInterestArea,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_reads_json_message() {
        let err = ApiError::from_http(400, "Bad Request", r#"{"message":"Nota inválida"}"#);
        assert_eq!(err.to_string(), "Nota inválida");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_from_http_uses_plain_text_body() {
        let err = ApiError::from_http(500, "Internal Server Error", "boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_from_http_falls_back_to_status_line() {
        let err = ApiError::from_http(502, "Bad Gateway", "   ");
        assert_eq!(err.to_string(), "Erro 502: Bad Gateway");

        let err = ApiError::from_http(500, "Internal Server Error", r#"{"error":"x"}"#);
        assert_eq!(err.to_string(), "Erro 500: Internal Server Error");
    }

    #[test]
    fn test_review_error_taxonomy() {
        let conflict: ReviewSubmitError = ApiError::from_http(409, "Conflict", "dup").into();
        assert_eq!(conflict, ReviewSubmitError::AlreadyReviewed);
        assert!(conflict.to_string().contains("já avaliou"));

        let forbidden: ReviewSubmitError = ApiError::from_http(403, "Forbidden", "").into();
        assert_eq!(forbidden, ReviewSubmitError::Forbidden);

        let bad: ReviewSubmitError = ApiError::from_http(400, "Bad Request", "").into();
        assert_eq!(bad, ReviewSubmitError::Validation(None));
        assert!(bad.to_string().starts_with("Dados da avaliação inválidos"));

        let bad_msg: ReviewSubmitError =
            ApiError::from_http(400, "Bad Request", r#"{"message":"Comentário ofensivo"}"#).into();
        assert_eq!(bad_msg.to_string(), "Comentário ofensivo");

        let other: ReviewSubmitError = ApiError::from_http(503, "Service Unavailable", "").into();
        assert_eq!(other.to_string(), "Erro 503: Service Unavailable");
    }

    #[test]
    fn test_network_error_is_server_class() {
        let err: ReviewSubmitError = ApiError::Network("offline".to_string()).into();
        assert!(matches!(err, ReviewSubmitError::Server(ApiError::Network(_))));
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(
            ReviewFormError::ScoreOutOfRange(6).to_string(),
            "A nota deve estar entre 1 e 5 (recebido 6)."
        );
        assert!(ReviewFormError::CommentTooLong(601).to_string().contains("600"));
    }
}
