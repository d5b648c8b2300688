use async_trait::async_trait;
use crate::models::{FriendAction, FriendEntry, FriendRequest, Page, Pageable, User};
use crate::services::api_client::{path_segment, ApiClient};
use crate::services::error::ApiError;

/// Endpoints `/friends/*`
#[async_trait(?Send)]
pub trait FriendsApi {
    /// `POST /friends/requests/{nickname}`
    async fn send_request(&self, nickname: &str) -> Result<(), ApiError>;

    /// `POST /friends/requests/{nickname}/accept|reject`
    async fn respond_to_request(&self, action: FriendAction, nickname: &str) -> Result<(), ApiError>;

    /// `GET /friends/list`
    async fn friends(&self, pageable: &Pageable) -> Result<Vec<FriendEntry>, ApiError>;

    /// `GET /friends/requests/received`
    async fn received_requests(&self, pageable: &Pageable) -> Result<Vec<FriendRequest>, ApiError>;

    /// `GET /friends/search`
    async fn search(&self, query: &str, pageable: &Pageable) -> Result<Vec<User>, ApiError>;
}

#[async_trait(?Send)]
impl FriendsApi for ApiClient {
    async fn send_request(&self, nickname: &str) -> Result<(), ApiError> {
        log::info!("📨 [API] Enviando solicitud de amistad a: {}", nickname);
        self.post_empty(&format!("/friends/requests/{}", path_segment(nickname))).await?;
        Ok(())
    }

    async fn respond_to_request(&self, action: FriendAction, nickname: &str) -> Result<(), ApiError> {
        log::info!("🤝 [API] {} solicitud de: {}", action.path_segment(), nickname);
        let path = format!("/friends/requests/{}/{}", path_segment(nickname), action.path_segment());
        self.post_empty(&path).await?;
        Ok(())
    }

    async fn friends(&self, pageable: &Pageable) -> Result<Vec<FriendEntry>, ApiError> {
        let response = self.get_with_query("/friends/list", pageable.query_pairs()).await?;
        let page: Page<FriendEntry> = ApiClient::decode(response).await?;
        Ok(page.into_items())
    }

    async fn received_requests(&self, pageable: &Pageable) -> Result<Vec<FriendRequest>, ApiError> {
        let response = self
            .get_with_query("/friends/requests/received", pageable.query_pairs())
            .await?;
        let page: Page<FriendRequest> = ApiClient::decode(response).await?;
        Ok(page.into_items())
    }

    async fn search(&self, query: &str, pageable: &Pageable) -> Result<Vec<User>, ApiError> {
        let mut params = vec![("query", query.to_string())];
        params.extend(pageable.query_pairs());
        let response = self.get_with_query("/friends/search", params).await?;
        let page: Page<User> = ApiClient::decode(response).await?;
        Ok(page.into_items())
    }
}
