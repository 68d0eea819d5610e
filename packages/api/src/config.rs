use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://hb-api.seriaati.xyz";

/// Where the command listing comes from and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// `None` leaves the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset and blank values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = match lookup("COMMANDS_API_URL") {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyBaseUrl),
            Some(url) => url.trim().trim_end_matches('/').to_string(),
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let timeout = match lookup("COMMANDS_API_TIMEOUT_SECS") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout { value: raw }),
            },
            None => None,
        };

        Ok(Self { base_url, timeout })
    }
}

/// Best-effort `.env` loading for local runs.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config.load_dotenv: loaded {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("config.load_dotenv: ignoring unreadable .env: {err}"),
    }
}
