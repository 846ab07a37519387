//! Settings for the HTTP session used by the translation client.
//!
//! The binary always runs with [`ClientConfig::default`]; library callers can
//! point the client at other hosts or route it through proxies.

use std::time::Duration;

/// Host serving the `translate_a/single` endpoint.
pub const DEFAULT_SERVICE_URL: &str = "translate.googleapis.com";

/// Browser-like `User-Agent`; the endpoint rejects some non-browser agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP session settings for [`GoogleTranslator`](crate::translation::GoogleTranslator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Hosts to send requests to. One is picked at random per request.
    pub service_urls: Vec<String>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Proxy URLs; `None` means a direct connection.
    /// The session keeps one client per entry and picks one at random per request.
    pub proxies: Vec<Option<String>>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_urls: vec![DEFAULT_SERVICE_URL.to_string()],
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxies: vec![None],
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Replaces the service hosts. An empty list keeps the default host.
    #[must_use]
    pub fn with_service_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls: Vec<String> = urls.into_iter().map(Into::into).collect();
        if !urls.is_empty() {
            self.service_urls = urls;
        }
        self
    }

    /// Replaces the proxy list. An empty list means direct connections only.
    #[must_use]
    pub fn with_proxies(mut self, proxies: Vec<Option<String>>) -> Self {
        self.proxies = if proxies.is_empty() { vec![None] } else { proxies };
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.service_urls, vec![DEFAULT_SERVICE_URL.to_string()]);
        assert_eq!(config.proxies, vec![None]);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_empty_lists_keep_defaults() {
        let config = ClientConfig::default()
            .with_service_urls(Vec::<String>::new())
            .with_proxies(vec![]);
        assert_eq!(config.service_urls, vec![DEFAULT_SERVICE_URL.to_string()]);
        assert_eq!(config.proxies, vec![None]);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .with_service_urls(["translate.google.com", "translate.google.co.kr"])
            .with_proxies(vec![Some("http://127.0.0.1:8080".to_string()), None])
            .with_user_agent("gtrans-test")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.service_urls.len(), 2);
        assert_eq!(config.proxies.len(), 2);
        assert_eq!(config.user_agent, "gtrans-test");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
