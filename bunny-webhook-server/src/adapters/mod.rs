//! Platform adapters
//!
//! Trait implementations bridging the webhook server with the core logic:
//! - **`KubeSecretStore`**: reads `core/v1 Secret` objects through the cluster API.

mod kube_secret_store;

pub use kube_secret_store::KubeSecretStore;
