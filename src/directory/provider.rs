use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use thiserror::Error;

use crate::config::ProviderSettings;
use crate::directory::types::{Country, CountryInfoResponse};

/// Errors that can occur while fetching the country directory.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Could not reach the country API.
    #[error("Connection to country API failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("Country API returned status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode country API response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// Source of the country directory.
///
/// The session fetches through this trait so tests can substitute a
/// canned directory without touching the network.
#[async_trait]
pub trait CountryProvider {
    async fn fetch_countries(&self) -> Result<Vec<Country>, ProviderError>;
}

/// GeoNames-backed country provider.
pub struct GeonamesProvider {
    client: Client,
    base_url: String,
    username: String,
}

impl GeonamesProvider {
    /// Build a provider with the configured timeouts.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(settings.timeout_seconds.into()))
            .build()
            .map_err(|source| ProviderError::Connection { source })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            username: settings.username.clone(),
        })
    }
}

#[async_trait]
impl CountryProvider for GeonamesProvider {
    async fn fetch_countries(&self) -> Result<Vec<Country>, ProviderError> {
        let url = format!("{}/countryInfoJSON", self.base_url);
        tracing::debug!(%url, "fetching country directory");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&[("username", self.username.as_str())])
            .send()
            .await
            .map_err(|source| ProviderError::Connection { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: CountryInfoResponse = response
            .json()
            .await
            .map_err(|source| ProviderError::Decode { source })?;

        tracing::info!(count = envelope.geonames.len(), "country directory fetched");
        Ok(envelope.geonames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let settings = ProviderSettings {
            base_url: "http://api.geonames.org/".to_string(),
            ..ProviderSettings::default()
        };
        let provider = GeonamesProvider::new(&settings).unwrap();
        assert_eq!(provider.base_url, "http://api.geonames.org");
    }
}
