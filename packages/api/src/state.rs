use crate::client::CommandClient;
use crate::config::UpstreamConfig;
use crate::error::FetchError;
use std::sync::{Arc, OnceLock};

/// Server-side state shared by every `list_commands` call.
#[derive(Debug)]
pub struct AppState {
    pub client: CommandClient,
    pub config: UpstreamConfig,
}

impl AppState {
    pub fn from_config(config: UpstreamConfig) -> Result<Self, FetchError> {
        tracing::info!("   Command service: {}", config.base_url);
        match config.timeout {
            Some(timeout) => tracing::info!("   Request timeout: {}s", timeout.as_secs()),
            None => tracing::info!("   Request timeout: none"),
        }

        let client = CommandClient::from_config(&config)?;
        Ok(Self { client, config })
    }

    /// Set the global AppState instance. Returns `false` if one was
    /// already installed.
    pub fn set_global(state: Arc<Self>) -> bool {
        STATE.set(state).is_ok()
    }

    /// The installed AppState, if startup got that far.
    pub fn global() -> Option<Arc<Self>> {
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Some(test_state);
        }

        STATE.get().cloned()
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
