// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod friend_panel_state;
pub mod route_state;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use friend_panel_state::*;
pub use route_state::*;
pub use app_state::*;
