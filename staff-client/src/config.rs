//! Client configuration

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default page length for list views
pub const ITEMS_PER_PAGE: u32 = 20;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the employee backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STAFF_API_URL | http://localhost:8080 | Backend base URL |
/// | STAFF_API_TOKEN | (none) | Bearer token |
/// | STAFF_API_TIMEOUT | 30 | Request timeout (seconds) |
/// | STAFF_ITEMS_PER_PAGE | 20 | Page length for list views |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// JWT token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Page length used by paginated list views
    pub items_per_page: u32,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            items_per_page: ITEMS_PER_PAGE,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("STAFF_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            token: std::env::var("STAFF_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            timeout: std::env::var("STAFF_API_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            items_per_page: std::env::var("STAFF_ITEMS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(ITEMS_PER_PAGE),
        }
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the page length for list views
    pub fn with_items_per_page(mut self, items_per_page: u32) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("http://hr.internal:9000")
            .with_token("abc")
            .with_timeout(5)
            .with_items_per_page(50);

        assert_eq!(config.base_url, "http://hr.internal:9000");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.items_per_page, 50);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, None);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.items_per_page, ITEMS_PER_PAGE);
    }
}
