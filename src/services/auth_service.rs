use async_trait::async_trait;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Endpoints `/auth/*`
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login` - el servidor fija la cookie de sesión
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;

    /// `POST /auth/register` - no establece sesión
    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError>;

    /// `POST /auth/logout`
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /auth/check` - usuario actual si la cookie es válida
    async fn check(&self) -> Result<Option<User>, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        log::info!("🔐 [API] Login para: {}", request.email);
        let response = self.post_json("/auth/login", request).await?;
        ApiClient::decode(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        log::info!("📝 [API] Registro de: {} ({})", request.nick_name, request.email);
        let response = self.post_json("/auth/register", request).await?;
        ApiClient::decode(response).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/auth/logout").await?;
        Ok(())
    }

    async fn check(&self) -> Result<Option<User>, ApiError> {
        let response = self.get_with_query("/auth/check", Vec::new()).await?;
        ApiClient::decode_optional(response).await
    }
}
