//! HTTP transport for the backend REST API
//!
//! [`HttpClient`] is the seam the entity services are written against;
//! [`NetworkHttpClient`] implements it on top of reqwest.

use async_trait::async_trait;
use http::HeaderMap;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::pagination::{LINK_HEADER, TOTAL_COUNT_HEADER};
use shared::{Page, PageLinks, parse_links};

use crate::{ClientConfig, ClientError, ClientResult};

/// Content type for PATCH bodies (JSON merge patch)
pub const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Problem document returned by the backend on errors
#[derive(serde::Deserialize)]
struct ProblemResponse {
    pub title: String,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// HTTP client trait
///
/// Paths are relative to the configured base URL (e.g. `api/employees/3`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// GET a pageable list; pagination metadata is read from the headers
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<Page<T>>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete(&self, path: &str) -> ClientResult<()>;
    fn token(&self) -> Option<&str>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    /// Create a client from configuration (timeout and token included)
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(AUTHORIZATION, auth),
            None => req,
        }
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        // Problem documents carry a better message than the raw body
        if let Ok(problem) = serde_json::from_str::<ProblemResponse>(&text) {
            return Err(ClientError::Api {
                status: problem.status.unwrap_or(status.as_u16()),
                title: problem.title,
                detail: problem.detail,
            });
        }
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(text)),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            _ => Err(ClientError::Internal(format!("{}: {}", status, text))),
        }
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Build a [`Page`] from a list body and its response headers
///
/// A missing or malformed `link` header yields a page without links.
pub fn page_from_headers<T>(items: Vec<T>, headers: &HeaderMap) -> Page<T> {
    let links = headers
        .get(LINK_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|raw| {
            parse_links(raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Ignoring unparseable link header");
                PageLinks::new()
            })
        })
        .unwrap_or_default();

    let total_count = headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok());

    Page::new(items, links, total_count)
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authorize(self.client.get(self.url(path)));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<Page<T>> {
        let req = self.authorize(self.client.get(self.url(path)).query(query));
        let response = Self::check_status(req.send().await?).await?;
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let items: Vec<T> = serde_json::from_slice(&bytes)?;
        Ok(page_from_headers(items, &headers))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.post(self.url(path)).json(body));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.put(self.url(path)).json(body));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let payload = serde_json::to_vec(body)?;
        let req = self.authorize(
            self.client
                .patch(self.url(path))
                .header(CONTENT_TYPE, MERGE_PATCH_JSON)
                .body(payload),
        );
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.authorize(self.client.delete(self.url(path)));
        Self::check_status(req.send().await?).await?;
        Ok(())
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_url_joining() {
        let client = NetworkHttpClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("api/employees"), "http://localhost:8080/api/employees");
        assert_eq!(client.url("/api/jobs/2"), "http://localhost:8080/api/jobs/2");
    }

    #[test]
    fn test_empty_base_url_is_config_error() {
        let err = NetworkHttpClient::new("  ").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_token_header() {
        let client = NetworkHttpClient::new("http://localhost").unwrap();
        assert!(client.token().is_none());
        let client = client.with_token("t0k");
        assert_eq!(client.auth_header().as_deref(), Some("Bearer t0k"));
    }

    #[test]
    fn test_page_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK_HEADER,
            HeaderValue::from_static("<http://localhost/api/employees?page=1&size=2>; rel=\"next\""),
        );
        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("5"));

        let page = page_from_headers(vec![1, 2], &headers);
        assert_eq!(page.links.get("next"), Some(&1));
        assert_eq!(page.total_count, Some(5));
    }

    #[test]
    fn test_page_from_headers_tolerates_bad_link() {
        let mut headers = HeaderMap::new();
        headers.insert(LINK_HEADER, HeaderValue::from_static("garbage"));

        let page = page_from_headers(vec!["x"], &headers);
        assert!(page.links.is_empty());
        assert_eq!(page.total_count, None);
    }
}
