pub mod form;
pub mod login_form;
pub mod register_form;
pub mod session_viewmodel;
pub mod friend_panel_viewmodel;

pub use form::{FieldState, SubmitOutcome};
pub use login_form::{LoginField, LoginForm};
pub use register_form::{RegisterField, RegisterForm};
pub use session_viewmodel::SessionViewModel;
pub use friend_panel_viewmodel::{FriendPanelViewModel, PanelPaging};
