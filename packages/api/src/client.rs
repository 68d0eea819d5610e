use tracing::debug;

use crate::config::UpstreamConfig;
use crate::error::FetchError;
use crate::locale::Locale;
use crate::types::CommandListing;

/// HTTP client for the command service's `/commands` endpoint.
#[derive(Debug, Clone)]
pub struct CommandClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CommandClient {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("hoyo-buddy-commands/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            endpoint: commands_url(&config.base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET per call; no retries.
    pub async fn fetch(&self, locale: Locale) -> Result<CommandListing, FetchError> {
        debug!("client.fetch: locale={} endpoint={}", locale, self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("locale", locale.code())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server {
                status: status.as_u16(),
            });
        }

        // Read the body first so transport failures stay distinct from bad JSON.
        let body = response.bytes().await.map_err(|e| FetchError::Network(e.to_string()))?;
        let listing: CommandListing = serde_json::from_slice(&body)?;

        debug!(
            "client.fetch: locale={} commands={} bytes={}",
            locale,
            listing.len(),
            body.len()
        );
        Ok(listing)
    }
}

pub fn commands_url(base_url: &str) -> String {
    format!("{}/commands", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_joined_once() {
        assert_eq!(
            commands_url("https://hb-api.seriaati.xyz"),
            "https://hb-api.seriaati.xyz/commands"
        );
        assert_eq!(
            commands_url("https://hb-api.seriaati.xyz//"),
            "https://hb-api.seriaati.xyz/commands"
        );
    }

    #[test]
    fn client_uses_configured_base_url() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Some(std::time::Duration::from_secs(2)),
        };
        let client = CommandClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:1/commands");
    }
}
