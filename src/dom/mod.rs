// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod history;
pub mod scroll_lock;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use history::*;
pub use scroll_lock::*;
