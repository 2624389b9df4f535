//! Service layer

mod challenge_service;
mod record_matcher;
mod zone_resolver;

pub use challenge_service::{challenge_record_name, ChallengeService, CHALLENGE_RECORD_TTL};
pub use record_matcher::find_txt_record;
pub use zone_resolver::{ZonePages, ZoneResolver, DEFAULT_MAX_ZONE_PAGES, ZONE_PAGE_SIZE};

use std::sync::Arc;

use bunny_webhook_provider::log_sanitizer::mask_secret;
use bunny_webhook_provider::DnsProvider;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ProviderFactory, SecretStore};
use crate::types::{ChallengeRequest, SecretKeySelector, SolverConfig};

/// Service context holding all dependencies.
///
/// Built by the platform layer with its own trait implementations.
pub struct ServiceContext {
    /// Secret store
    pub secret_store: Arc<dyn SecretStore>,
    /// Provider factory
    pub provider_factory: Arc<dyn ProviderFactory>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(
        secret_store: Arc<dyn SecretStore>,
        provider_factory: Arc<dyn ProviderFactory>,
    ) -> Self {
        Self {
            secret_store,
            provider_factory,
        }
    }

    /// Build the provider client for one challenge.
    ///
    /// Decodes the solver config, reads the access key from its secret and
    /// creates the client.
    pub async fn provider_for_challenge(
        &self,
        ch: &ChallengeRequest,
    ) -> CoreResult<Arc<dyn DnsProvider>> {
        let config = SolverConfig::from_json(ch.config.as_ref())?;
        let access_key = self
            .load_access_key(&config.api_secret_ref, &ch.resource_namespace)
            .await?;
        self.provider_factory.create(access_key)
    }

    /// Read the access key referenced by `secret_ref`
    pub async fn load_access_key(
        &self,
        secret_ref: &SecretKeySelector,
        namespace: &str,
    ) -> CoreResult<String> {
        if secret_ref.name.is_empty() {
            return Err(CoreError::MissingSecretRef);
        }

        let data = self.secret_store.get(namespace, &secret_ref.name).await?;
        let value = data
            .get(&secret_ref.key)
            .ok_or_else(|| CoreError::SecretKeyNotFound {
                namespace: namespace.to_string(),
                name: secret_ref.name.clone(),
                key: secret_ref.key.clone(),
            })?;

        let access_key = String::from_utf8_lossy(value).into_owned();
        log::debug!(
            "Loaded access key {} from secret {namespace}/{}",
            mask_secret(&access_key),
            secret_ref.name
        );
        Ok(access_key)
    }
}
