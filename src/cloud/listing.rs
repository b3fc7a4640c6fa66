use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};

use crate::config::ProviderProfile;
use crate::models::ProbeResult;

/// Issues the unauthenticated listing request for a container.
///
/// Implementations never retry; see [`crate::cloud::retry::RetryPolicy`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingProbe: Send + Sync {
    async fn probe(&self, account_name: &str, container_name: &str) -> ProbeResult;
}

/// Listing probe that talks HTTP(S) to the provider.
pub struct HttpListingProbe {
    client: Client,
    provider: ProviderProfile,
}

impl HttpListingProbe {
    /// Create a probe whose requests are bounded by `timeout`.
    ///
    /// No credentials or authentication headers are ever attached.
    pub fn new(provider: ProviderProfile, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(HttpListingProbe { client, provider })
    }

    pub fn provider(&self) -> &ProviderProfile {
        &self.provider
    }
}

#[async_trait]
impl ListingProbe for HttpListingProbe {
    async fn probe(&self, account_name: &str, container_name: &str) -> ProbeResult {
        let url = self.provider.listing_url(account_name, container_name);
        debug!("Requesting {}", url);

        match self.client.get(&url).send().await {
            Ok(response) => classify_response(response).await,
            Err(e) => ProbeResult::ConnectionFailed(format!("Failed to connect to {}: {}", url, e)),
        }
    }
}

/// Map an HTTP response onto a probe result.
///
/// Only a 200 counts as a listing; every other status is reported as
/// `NotFound` with its code, including 403.
async fn classify_response(response: Response) -> ProbeResult {
    let status = response.status();
    if status != StatusCode::OK {
        debug!("{} answered with status {}", response.url(), status);
        return ProbeResult::NotFound(status.as_u16());
    }

    let url = response.url().to_string();
    match response.text().await {
        Ok(body) => ProbeResult::Found(body),
        Err(e) => ProbeResult::ConnectionFailed(format!("Failed to read listing from {}: {}", url, e)),
    }
}
