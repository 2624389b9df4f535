//! Bunny Webhook Core Library
//!
//! ACME DNS-01 challenge handling for the Bunny DNS cert-manager webhook:
//! - zone resolution over the paginated zone listing (`ZoneResolver`)
//! - TXT record lookup (`find_txt_record`)
//! - Present / CleanUp orchestration (`ChallengeService`)
//!
//! Platform concerns (where secrets come from, how providers are built) are
//! abstracted through traits so the logic can be driven by the webhook
//! server or by tests with in-memory implementations.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ChallengeService, ServiceContext};
pub use traits::{BunnyProviderFactory, ProviderFactory, SecretData, SecretStore};
