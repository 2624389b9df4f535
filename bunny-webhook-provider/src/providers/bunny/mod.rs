//! Bunny DNS Provider
//!
//! API reference: <https://docs.bunny.net/reference/dnszonepublic_index>

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::{BunnyAddRecordBody, BunnyDnsRecord, BunnyErrorResponse, BunnyZone, BunnyZoneList};

pub(crate) const BUNNY_API_BASE: &str = "https://api.bunny.net";
/// Bunny authentication header
pub(crate) const ACCESS_KEY_HEADER: &str = "AccessKey";
/// Largest page the zones API accepts
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 1000;

/// Bunny DNS Provider
pub struct BunnyProvider {
    pub(crate) client: Client,
    pub(crate) access_key: String,
    pub(crate) base_url: String,
}

impl BunnyProvider {
    /// Create a provider talking to the public Bunny API.
    pub fn new(access_key: String) -> Result<Self> {
        Self::with_base_url(access_key, BUNNY_API_BASE)
    }

    /// Create a provider talking to a custom API endpoint (proxies, tests).
    pub fn with_base_url(access_key: String, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::debug!(
            "Creating Bunny provider for {base_url} with key {}",
            mask_secret(&access_key)
        );
        Ok(Self {
            client: create_http_client("bunny")?,
            access_key,
            base_url,
        })
    }
}

impl std::fmt::Debug for BunnyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BunnyProvider")
            .field("base_url", &self.base_url)
            .field("access_key", &mask_secret(&self.access_key))
            .finish_non_exhaustive()
    }
}
