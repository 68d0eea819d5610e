use crate::error::FetchError;
use crate::locale::Locale;
use crate::types::{CommandListing, CommandsResponse};
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, info, warn};

/// Fetch the command listing for `locale` from the upstream service.
///
/// Upstream failures come back inside [`CommandsResponse::Failed`]; an
/// `Err` means the server itself is not ready to serve.
#[dioxus::prelude::post("/api/commands")]
pub async fn list_commands(locale: Locale) -> Result<CommandsResponse, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = locale;
        Err(ServerFnError::new("list_commands is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!("commands.list_commands: locale={}", locale);
        let state = crate::state::AppState::global()
            .ok_or_else(|| ServerFnError::new("command service is not configured"))?;

        let result = state.client.fetch(locale).await;
        match &result {
            Ok(listing) => info!(
                "commands.list_commands: locale={} commands={}",
                locale,
                listing.len()
            ),
            Err(err) => warn!("commands.list_commands: locale={} error={}", locale, err),
        }
        Ok(result.into())
    }
}

/// Client-side entry point used by the page. Failing to reach our own
/// server counts as a network failure.
pub async fn fetch_commands(locale: Locale) -> Result<CommandListing, FetchError> {
    match list_commands(locale).await {
        Ok(response) => response.into_result(),
        Err(err) => Err(FetchError::Network(err.to_string())),
    }
}
