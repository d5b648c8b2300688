pub mod user;
pub mod friend;
pub mod auth;
pub mod page;
pub mod error;

pub use user::User;
pub use friend::{FriendEntry, FriendRequest, FriendAction};
pub use auth::{LoginRequest, RegisterRequest};
pub use page::{Page, Pageable};
pub use error::ApiErrorBody;
