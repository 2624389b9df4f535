//! # bunny-webhook-provider
//!
//! A small async client for the [Bunny DNS](https://bunny.net/dns/) API,
//! covering what an ACME DNS-01 solver needs: paginated zone listing, zone
//! fetch (with records), record creation and record deletion.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)* — Use rustls for TLS.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bunny_webhook_provider::{
//!     create_provider, CreateDnsRecordRequest, DnsProvider, DnsRecordType, PaginationParams,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider("your-access-key".to_string())?;
//!
//!     let zones = provider.list_zones(&PaginationParams::new(1, 10)).await?;
//!     for zone in &zones.items {
//!         println!("{} ({})", zone.domain, zone.id);
//!     }
//!
//!     let record = provider
//!         .create_record(&CreateDnsRecordRequest {
//!             zone_id: zones.items[0].id,
//!             record_type: DnsRecordType::Txt,
//!             name: "_acme-challenge".to_string(),
//!             value: "token".to_string(),
//!             ttl: 120,
//!         })
//!         .await?;
//!     provider.delete_record(zones.items[0].id, record.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Requests are never retried; transient failures
//! ([`ProviderError::NetworkError`], [`ProviderError::Timeout`],
//! [`ProviderError::RateLimited`]) are returned to the caller as is.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

pub use types::{
    CreateDnsRecordRequest, DnsRecord, DnsRecordType, PaginatedResponse, PaginationParams, Zone,
};

pub use providers::BunnyProvider;
pub use providers::common::normalize_domain_name;
pub use utils::log_sanitizer;
