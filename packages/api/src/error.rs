use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a command listing could not be loaded.
///
/// Serializable so it can travel from the server function back to the page
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    #[error("could not reach the command service: {0}")]
    Network(String),
    #[error("command service responded with HTTP {status}")]
    Server { status: u16 },
    #[error("command service sent an unreadable listing: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether asking again has a reasonable chance of succeeding.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Server { status } => *status >= 500 || *status == 429,
            FetchError::Decode(_) => false,
        }
    }
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Server {
                status: status.as_u16(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LocaleError {
    #[error("no locale is displayed as {0:?}")]
    UnknownDisplayName(String),
    #[error("display name {0:?} is used by more than one locale")]
    DuplicateDisplayName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("COMMANDS_API_URL must not be empty")]
    EmptyBaseUrl,
    #[error("COMMANDS_API_TIMEOUT_SECS must be a positive integer, got {value:?}")]
    InvalidTimeout { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            FetchError::Server { status: 503 }.to_string(),
            "command service responded with HTTP 503"
        );
        assert!(FetchError::Network("connection refused".into())
            .to_string()
            .contains("connection refused"));
    }

    #[test]
    fn transient_failures() {
        assert!(FetchError::Network("reset".into()).is_transient());
        assert!(FetchError::Server { status: 502 }.is_transient());
        assert!(FetchError::Server { status: 429 }.is_transient());
        assert!(!FetchError::Server { status: 404 }.is_transient());
        assert!(!FetchError::Decode("expected map".into()).is_transient());
    }

    #[test]
    fn wire_shape_is_tagged_by_kind() {
        let json = serde_json::to_value(FetchError::Server { status: 500 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "server", "detail": {"status": 500}}));

        let json = serde_json::to_value(FetchError::Decode("eof".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "decode", "detail": "eof"}));
    }

    #[test]
    fn json_errors_are_decode_failures() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
