// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Todas las llamadas viajan con `credentials: include`: la sesión es una
// cookie gestionada por el servidor, nunca se pasa un token explícito.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;
use crate::models::ApiErrorBody;
use crate::services::error::ApiError;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).credentials(RequestCredentials::Include)
    }

    /// POST con cuerpo JSON
    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let request = self
            .post(path)
            .json(body)
            .map_err(|e| ApiError::Build(e.to_string()))?;
        self.execute(request).await
    }

    /// POST sin cuerpo
    pub(crate) async fn post_empty(&self, path: &str) -> Result<Response, ApiError> {
        let request = self
            .post(path)
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;
        self.execute(request).await
    }

    /// GET con parámetros de query
    pub(crate) async fn get_with_query(&self, path: &str, query: Vec<(&'static str, String)>) -> Result<Response, ApiError> {
        let request = self
            .get(path)
            .query(query)
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;
        self.execute(request).await
    }

    /// Envía la petición y convierte cualquier estado no-2xx en `ApiError::Http`
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let method = request.method();
        let url = request.url();
        let response = request.send().await?;

        if response.ok() {
            log::debug!("🌐 [API] {:?} {} -> {}", method, url, response.status());
            return Ok(response);
        }

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => ApiErrorBody::from_text(&text),
            Err(_) => None,
        };
        log::warn!("⚠️ [API] {:?} {} -> HTTP {}", method, url, status);
        Err(ApiError::Http { status, body })
    }

    /// Decodifica el cuerpo como JSON
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let text = response.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        parse_json(&text)
    }

    /// Decodifica el cuerpo como JSON opcional (vacío o `null` -> `None`)
    pub(crate) async fn decode_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
        let text = response.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        parse_optional_json(&text)
    }
}

pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

pub(crate) fn parse_optional_json<T: DeserializeOwned>(text: &str) -> Result<Option<T>, ApiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    parse_json(trimmed).map(Some)
}

/// Codifica un segmento de ruta (p.ej. un nickname con espacios o '/')
pub(crate) fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/auth/check"), "http://localhost:8080/auth/check");
    }

    #[test]
    fn empty_or_null_body_is_none() {
        assert_eq!(parse_optional_json::<User>("").unwrap(), None);
        assert_eq!(parse_optional_json::<User>(" null ").unwrap(), None);
        let user = parse_optional_json::<User>(r#"{"id":1,"nickName":"alice","email":"a@b.com"}"#).unwrap();
        assert_eq!(user.map(|u| u.id), Some(1));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(parse_json::<User>("{oops"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn nicknames_are_percent_encoded() {
        assert_eq!(path_segment("alice"), "alice");
        assert_eq!(path_segment("bob smith"), "bob%20smith");
        assert_eq!(path_segment("a/b"), "a%2Fb");
    }
}
