//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use bunny_webhook_provider::ProviderError;

/// Core layer error type
///
/// Every variant renders with a context prefix so that the message returned
/// to cert-manager identifies the failing step on its own.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Solver config JSON could not be decoded
    #[error("error decoding solver config: {0}")]
    ConfigDecode(String),

    /// `apiSecretRef` is missing or has no name
    #[error("undefined access key secret")]
    MissingSecretRef,

    /// Secret could not be read from the cluster
    #[error("failed to get secret '{namespace}/{name}': {message}")]
    SecretLookup {
        namespace: String,
        name: String,
        message: String,
    },

    /// Secret exists but has no such data key
    #[error("key not found {key:?} in secret '{namespace}/{name}'")]
    SecretKeyNotFound {
        namespace: String,
        name: String,
        key: String,
    },

    /// Provider client could not be constructed
    #[error("failed to create DNS provider client: {0}")]
    ProviderClient(ProviderError),

    /// Zone listing request failed
    #[error("failed to list DNS zones: {0}")]
    ZoneList(ProviderError),

    /// No zone matches the resolved zone name
    #[error("failed to get zone id from zone name: {0}")]
    ZoneNotFound(String),

    /// Provider kept reporting more pages past the configured cap
    #[error("failed to get zone id from zone name: {zone}: gave up after {pages} pages")]
    ZonePageLimitExceeded { zone: String, pages: u32 },

    /// Zone (and its records) could not be fetched
    #[error("error getting zone records: {0}")]
    RecordFetch(ProviderError),

    /// TXT record creation failed
    #[error("failed to add TXT record: {0}")]
    RecordCreate(ProviderError),

    /// TXT record deletion failed
    #[error("failed to delete TXT record: {0}")]
    RecordDelete(ProviderError),

    /// Present/CleanUp called before the solver was initialized
    #[error("solver not initialized")]
    NotInitialized,
}

impl CoreError {
    /// Whether it is expected behavior (misconfiguration, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigDecode(_)
            | Self::MissingSecretRef
            | Self::SecretKeyNotFound { .. }
            | Self::ZoneNotFound(_) => true,
            Self::ZoneList(e)
            | Self::RecordFetch(e)
            | Self::RecordCreate(e)
            | Self::RecordDelete(e)
            | Self::ProviderClient(e) => e.is_expected(),
            Self::SecretLookup { .. } | Self::ZonePageLimitExceeded { .. } | Self::NotInitialized => {
                false
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
