pub mod api_client;
pub mod auth_service;
pub mod friend_service;
pub mod error;

pub use api_client::ApiClient;
pub use auth_service::AuthApi;
pub use friend_service::FriendsApi;
pub use error::ApiError;
