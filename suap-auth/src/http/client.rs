//! HTTP client builder shared by the token exchange and resource calls.

use std::time::Duration;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("suap-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builder for the `reqwest::Client` used to talk to SUAP.
///
/// No retry middleware: a failed call surfaces directly to the caller.
pub struct ClientBuilder {
    config: HttpClientConfig,
}

impl ClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent)
            .build()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default() {
        let builder = ClientBuilder::new();
        assert_eq!(builder.config.timeout, Duration::from_secs(30));
        assert!(builder.config.user_agent.starts_with("suap-auth/"));
    }

    #[test]
    fn test_builder_with_timeout() {
        let builder = ClientBuilder::new().with_timeout(Duration::from_secs(5));
        assert_eq!(builder.config.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_build_client() {
        let result = ClientBuilder::new()
            .with_timeout(Duration::from_secs(1))
            .build();
        assert!(result.is_ok());
    }
}
