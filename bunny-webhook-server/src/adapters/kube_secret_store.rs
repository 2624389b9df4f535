//! Kubernetes-backed secret store

use async_trait::async_trait;
use bunny_webhook_core::error::{CoreError, CoreResult};
use bunny_webhook_core::traits::{SecretData, SecretStore};
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};

/// Reads secrets from the namespace of each challenge.
///
/// Only `data` is consulted; `stringData` is write-only on the API server and
/// never appears in a read.
#[derive(Clone)]
pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get(&self, namespace: &str, name: &str) -> CoreResult<SecretData> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);

        let secret = api.get(name).await.map_err(|e| {
            tracing::warn!("Failed to read secret {namespace}/{name}: {e}");
            CoreError::SecretLookup {
                namespace: namespace.to_string(),
                name: name.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(secret
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.0))
            .collect())
    }
}
