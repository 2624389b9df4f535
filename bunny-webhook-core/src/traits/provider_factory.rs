//! Provider factory abstract Trait

use std::sync::Arc;

use bunny_webhook_provider::{BunnyProvider, DnsProvider};

use crate::error::{CoreError, CoreResult};

/// Builds a provider client from an access key.
///
/// A fresh client is built for every challenge; nothing is cached.
pub trait ProviderFactory: Send + Sync {
    /// Create a provider authenticated with `access_key`.
    fn create(&self, access_key: String) -> CoreResult<Arc<dyn DnsProvider>>;
}

/// Default factory producing [`BunnyProvider`] clients.
#[derive(Debug, Clone, Default)]
pub struct BunnyProviderFactory {
    /// Override for the Bunny API endpoint; the public API when `None`.
    base_url: Option<String>,
}

impl BunnyProviderFactory {
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }
}

impl ProviderFactory for BunnyProviderFactory {
    fn create(&self, access_key: String) -> CoreResult<Arc<dyn DnsProvider>> {
        let provider = match &self.base_url {
            Some(url) => BunnyProvider::with_base_url(access_key, url.as_str()),
            None => BunnyProvider::new(access_key),
        }
        .map_err(CoreError::ProviderClient)?;
        Ok(Arc::new(provider))
    }
}
