use std::time::Duration;

use log::warn;
use tokio::time::sleep;

use crate::cloud::listing::ListingProbe;
use crate::constants::{DEFAULT_MAX_RETRIES, RETRY_BASE_DELAY_MS, RETRY_MAX_DELAY_SECS};
use crate::models::ProbeResult;

/// Retry policy for listing probes.
///
/// Only connection failures are retried. A non-200 status is a definitive
/// answer from the server and is returned as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(RETRY_BASE_DELAY_MS),
            max_delay: Duration::from_secs(RETRY_MAX_DELAY_SECS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            ..Self::default()
        }
    }

    /// A policy that never retries
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Exponential backoff delay before retry number `attempt` (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Run `probe`, retrying connection failures up to `max_retries` times
    pub async fn probe(
        &self,
        probe: &dyn ListingProbe,
        account_name: &str,
        container_name: &str,
    ) -> ProbeResult {
        let mut attempt = 0;

        loop {
            let result = probe.probe(account_name, container_name).await;

            match result {
                ProbeResult::ConnectionFailed(ref cause) if attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.delay_for(attempt);
                    warn!(
                        "Listing probe for {}/{} failed, retry {} of {} in {:?}: {}",
                        account_name, container_name, attempt, self.max_retries, delay, cause
                    );
                    sleep(delay).await;
                }
                other => return other,
            }
        }
    }
}
