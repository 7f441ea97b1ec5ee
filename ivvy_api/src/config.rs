use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.ivvy.com/api/1.0";

/// Request timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for building a [`Client`](crate::Client).
///
/// The library never reads the environment; callers (such as the CLI) fill
/// this in from wherever they keep their settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Sent verbatim as the `authorization` header on every request.
    pub authorization: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("ivvy-api-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            authorization: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_authorization(mut self, authorization: &str) -> Self {
        self.authorization = Some(authorization.to_string());
        self
    }

    pub(crate) fn default_headers(&self) -> Vec<(String, String)> {
        match &self.authorization {
            Some(value) => vec![("authorization".to_string(), value.clone())],
            None => Vec::new(),
        }
    }
}
