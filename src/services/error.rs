// ============================================================================
// API ERROR - Errores tipados de la capa HTTP
// ============================================================================

use thiserror::Error;
use crate::models::ApiErrorBody;

/// Errores que puede producir una llamada al backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de red (sin respuesta del servidor)
    #[error("Network error: {0}")]
    Network(String),

    /// El servidor respondió con un estado no-2xx
    #[error("Request failed with status code {status}")]
    Http {
        status: u16,
        body: Option<ApiErrorBody>,
    },

    /// La respuesta no se pudo decodificar
    #[error("Parse error: {0}")]
    Parse(String),

    /// La petición no se pudo construir
    #[error("Request build error: {0}")]
    Build(String),
}

impl ApiError {
    /// Mensaje enviado por el servidor en el cuerpo del error, si existe
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { body: Some(body), .. } => body.first_message(),
            _ => None,
        }
    }

    /// Lista de errores de validación del servidor (puede estar vacía)
    pub fn validation_errors(&self) -> &[String] {
        match self {
            ApiError::Http { body: Some(body), .. } => &body.errors,
            _ => &[],
        }
    }

    /// Mensaje para el usuario: mensaje del servidor, luego el texto genérico del error, luego `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let generic = self.to_string();
        if generic.trim().is_empty() {
            fallback.to_string()
        } else {
            generic
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: Option<ApiErrorBody>) -> ApiError {
        ApiError::Http { status, body }
    }

    #[test]
    fn user_message_prefers_server_message() {
        let err = http(
            400,
            Some(ApiErrorBody {
                message: Some("Friend request already sent".into()),
                ..ApiErrorBody::default()
            }),
        );
        assert_eq!(err.user_message("Failed to send invitation"), "Friend request already sent");
    }

    #[test]
    fn user_message_falls_back_to_generic_text() {
        let err = http(500, None);
        assert_eq!(err.user_message("Failed to send invitation"), "Request failed with status code 500");
    }

    #[test]
    fn unauthorized_statuses() {
        assert!(http(401, None).is_unauthorized());
        assert!(http(403, None).is_unauthorized());
        assert!(!http(404, None).is_unauthorized());
        assert!(!ApiError::Parse("x".into()).is_unauthorized());
    }
}
