use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio::net::lookup_host;
use tokio::time::timeout;

use crate::config::ProviderProfile;
use crate::constants::RESOLVE_PORT;

/// Decides whether a storage account exists.
///
/// Providers without wildcard DNS only publish records for accounts that
/// exist, so a successful lookup of the account host is taken as proof of
/// existence. Every failure mode collapses to `false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExistenceResolver: Send + Sync {
    async fn resolve(&self, account_name: &str) -> bool;
}

/// Resolver backed by the host's own name resolution.
pub struct HostResolver {
    provider: ProviderProfile,
    timeout: Duration,
}

impl HostResolver {
    pub fn new(provider: ProviderProfile, timeout: Duration) -> Self {
        HostResolver { provider, timeout }
    }
}

#[async_trait]
impl ExistenceResolver for HostResolver {
    async fn resolve(&self, account_name: &str) -> bool {
        let host = self.provider.account_host(account_name);

        let lookup = timeout(self.timeout, lookup_host((host.as_str(), RESOLVE_PORT))).await;
        match lookup {
            Ok(Ok(mut addrs)) => match addrs.next() {
                Some(addr) => {
                    debug!("{} resolved to {}", host, addr.ip());
                    true
                }
                None => {
                    debug!("{} resolved to no addresses", host);
                    false
                }
            },
            Ok(Err(e)) => {
                debug!("{} does not resolve: {}", host, e);
                false
            }
            Err(_) => {
                debug!("Resolution of {} timed out after {:?}", host, self.timeout);
                false
            }
        }
    }
}
