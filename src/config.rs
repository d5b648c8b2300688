use serde::{Deserialize, Serialize};
use crate::utils::constants::{API_URL, LIST_PAGE_SIZE, LOG_LEVEL, SEARCH_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub search_page_size: u32,
    pub list_page_size: u32,
    pub default_sort: Option<String>,
    pub fallback_invitation_error: String,
    pub fallback_login_error: String,
    pub fallback_register_error: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_URL.to_string(),
            log_level: LOG_LEVEL.unwrap_or("info").to_string(),
            search_page_size: SEARCH_PAGE_SIZE,
            list_page_size: LIST_PAGE_SIZE,
            default_sort: None,
            fallback_invitation_error: "Failed to send invitation".to_string(),
            fallback_login_error: "Login failed. Please check your credentials.".to_string(),
            fallback_register_error: "Registration failed. Please try again.".to_string(),
        }
    }
}

impl AppConfig {
    /// Nivel para `wasm_logger`; valores desconocidos caen a `Info`
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel_page_sizes() {
        let config = AppConfig::default();
        assert_eq!(config.search_page_size, 5);
        assert_eq!(config.list_page_size, 10);
        assert_eq!(config.default_sort, None);
    }

    #[test]
    fn unknown_log_level_is_info() {
        let mut config = AppConfig::default();
        config.log_level = "verbose".into();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "WARN".into();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
