// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod layout;
pub mod navbar;
pub mod home;
pub mod fields;
pub mod login;
pub mod register;
pub mod friend_panel;

pub use layout::render_app;
pub use friend_panel::update_friend_panel;
