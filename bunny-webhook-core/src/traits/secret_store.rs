//! Secret store abstraction

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::CoreResult;

/// Secret data: key -> raw bytes
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// Read access to cluster secrets
///
/// Implementations:
/// - Webhook server: `KubeSecretStore` (reads `core/v1 Secret`)
/// - Tests: `MockSecretStore`
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Read all data of a secret
    ///
    /// # Arguments
    /// * `namespace` - namespace of the secret
    /// * `name` - secret name
    ///
    /// # Errors
    /// `CoreError::SecretLookup` when the secret is missing or unreadable
    async fn get(&self, namespace: &str, name: &str) -> CoreResult<SecretData>;
}
