use serde::{Deserialize, Serialize};

/// Cuerpo de error devuelto por el backend.
/// Todos los campos son opcionales: se leen de forma tipada en vez de sondear propiedades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, alias = "businessErrorDescription")]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, alias = "validationErrors")]
    pub errors: Vec<String>,
}

impl ApiErrorBody {
    /// Interpreta el texto de una respuesta fallida: JSON si se puede, texto plano si no.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str::<ApiErrorBody>(trimmed) {
            Ok(body) => Some(body),
            Err(_) => Some(Self {
                message: Some(trimmed.to_string()),
                ..Self::default()
            }),
        }
    }

    /// Primer mensaje disponible: `message`, luego `error`, luego la lista de validación
    pub fn first_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.error.as_deref().filter(|m| !m.is_empty()))
            .or_else(|| self.errors.first().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_body_becomes_message() {
        let body = ApiErrorBody::from_text("Logged out successfully").unwrap();
        assert_eq!(body.first_message(), Some("Logged out successfully"));
        assert!(ApiErrorBody::from_text("   ").is_none());
    }

    #[test]
    fn message_has_priority_over_error_and_list() {
        let body = ApiErrorBody::from_text(
            r#"{"error":"Forbidden","message":"Login and / or password is incorrect","errors":["x"]}"#,
        )
        .unwrap();
        assert_eq!(body.first_message(), Some("Login and / or password is incorrect"));

        let only_list = ApiErrorBody::from_text(r#"{"validationErrors":["Email is not formated"]}"#).unwrap();
        assert_eq!(only_list.first_message(), Some("Email is not formated"));
    }
}
