//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::BunnyProvider;
use crate::traits::DnsProvider;

/// Creates a [`DnsProvider`] for the Bunny API from an access key.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` so callers can
/// swap in other implementations (tests, proxies) behind the same trait.
///
/// # Examples
///
/// ```rust,no_run
/// use bunny_webhook_provider::{create_provider, DnsProvider};
///
/// let provider = create_provider("your-access-key".to_string()).unwrap();
/// assert_eq!(provider.id(), "bunny");
/// ```
pub fn create_provider(access_key: String) -> Result<Arc<dyn DnsProvider>> {
    Ok(Arc::new(BunnyProvider::new(access_key)?))
}
