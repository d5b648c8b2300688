// ============================================================================
// VALIDATION - Reglas de validación de formularios (cliente)
// ============================================================================

use std::sync::LazyLock;
use regex::Regex;

/// Parte local, '@', dominio, '.', sufijo; sin espacios ni '@' extra.
/// No pretende cubrir RFC 5322, solo detectar entradas claramente mal formadas.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Campo obligatorio con texto (se ignoran espacios)
pub fn require(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(email) {
        Some("Email is not valid".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "plain", "a@b", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@@b.com", "a@b c.com"] {
            assert!(!is_valid_email(bad), "{} debería ser inválido", bad);
        }
    }

    #[test]
    fn email_messages() {
        assert_eq!(validate_email("  ").as_deref(), Some("Email is required"));
        assert_eq!(validate_email("nope").as_deref(), Some("Email is not valid"));
        assert_eq!(validate_email(" a@b.com "), None);
    }

    #[test]
    fn require_ignores_whitespace() {
        assert_eq!(require("   ", "First name is required").as_deref(), Some("First name is required"));
        assert_eq!(require("Ann", "First name is required"), None);
    }
}
