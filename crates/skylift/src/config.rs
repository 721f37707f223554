//! Client configuration.

use std::time::Duration;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.skylift.net";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("skylift-rs/", env!("CARGO_PKG_VERSION"));

/// Skylift client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Config {
    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Builder for the Skylift client.
#[derive(Debug, Default)]
pub struct SkyliftBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    pub(crate) http_client: Option<reqwest::Client>,
}

impl SkyliftBuilder {
    /// Create a new builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set the base URL of the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Ignored when a custom HTTP client is supplied via
    /// [`SkyliftBuilder::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a pre-configured `reqwest::Client` instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the configuration.
    pub(crate) fn build_config(&self) -> Result<Config, crate::Error> {
        if self.api_key.is_empty() {
            return Err(crate::Error::Config("api_key cannot be empty".into()));
        }

        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Ok(Config {
            api_key: self.api_key.clone(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
        })
    }
}
