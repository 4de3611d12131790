//! Client configuration with environment overrides.

use std::time::Duration;

use crate::route::BASE_URL;

pub const ENV_BASE_URL: &str = "QUAVER_API_BASE_URL";
pub const ENV_USER_AGENT: &str = "QUAVER_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "QUAVER_TIMEOUT_SECS";

/// Settings used when the client builds its own session.
///
/// An injected `reqwest::Client` is used as-is; only `base_url`
/// applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            user_agent: format!("quaver-client/{}", crate::VERSION),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `QUAVER_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            config.user_agent = agent;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.timeout = None,
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid {ENV_TIMEOUT_SECS}");
                }
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the session this config describes.
    pub(crate) fn build_session(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
