//! Configuration for the delivery API client.

use crate::error::{ApiError, Result};

/// Configuration for the delivery API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin plus fixed base path every endpoint path is appended to.
    pub base_url: String,
    /// Per-request deadline in milliseconds.
    pub request_timeout_ms: u64,
    /// Connection timeout in seconds.
    pub connection_timeout_secs: u64,
    /// Log every request and response at debug level.
    pub enable_logging: bool,
    /// Proxy URL (optional).
    pub proxy_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:8080/api".to_string(),
            request_timeout_ms: 15000,
            connection_timeout_secs: 10,
            enable_logging: false,
            proxy_url: String::new(),
            user_agent: concat!("baoleme-http/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Defaults overridden by `BAOLEME_BASE_URL`, `BAOLEME_TIMEOUT_MS` and
    /// `BAOLEME_PROXY`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("BAOLEME_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(ms) = std::env::var("BAOLEME_TIMEOUT_MS") {
            config.request_timeout_ms = ms
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid BAOLEME_TIMEOUT_MS: {}", ms)))?;
        }
        if let Ok(proxy) = std::env::var("BAOLEME_PROXY") {
            config.proxy_url = proxy;
        }
        Ok(config)
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint_url(&self, path: &str, query: &[(String, String)]) -> Result<String> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = url::Url::parse(&joined).map_err(|e| ApiError::Config(e.to_string()))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.request_timeout_ms, 15000);
        assert_eq!(config.connection_timeout_secs, 10);
        assert!(!config.enable_logging);
        assert_eq!(config.proxy_url, "");
        assert!(config.user_agent.starts_with("baoleme-http/"));
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig {
            request_timeout_ms: 1000,
            ..Default::default()
        };
        assert_eq!(config.request_timeout_ms, 1000);
        assert_eq!(config.connection_timeout_secs, 10);
    }

    #[test]
    fn test_endpoint_url_joins_base_path() {
        let config = ClientConfig::default().with_base_url("http://food.test/api/");
        assert_eq!(
            config.endpoint_url("/user/info", &[]).unwrap(),
            "http://food.test/api/user/info"
        );
    }

    #[test]
    fn test_endpoint_url_appends_query() {
        let config = ClientConfig::default().with_base_url("http://food.test/api");
        let url = config
            .endpoint_url(
                "/orders/available",
                &[
                    ("page".to_string(), "1".to_string()),
                    ("page_size".to_string(), "10".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(url, "http://food.test/api/orders/available?page=1&page_size=10");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        assert!(matches!(
            config.endpoint_url("/user/info", &[]),
            Err(ApiError::Config(_))
        ));
    }
}
