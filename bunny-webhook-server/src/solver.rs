//! Solver plugin contract and the Bunny DNS solver

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use bunny_webhook_core::services::ZoneResolver;
use bunny_webhook_core::types::ChallengeRequest;
use bunny_webhook_core::{
    BunnyProviderFactory, ChallengeService, CoreError, CoreResult, SecretStore, ServiceContext,
};

use crate::adapters::KubeSecretStore;

/// A DNS-01 solver served by the webhook.
#[async_trait]
pub trait Solver: Send + Sync {
    /// Resource name under the API group; cert-manager's `solverName`.
    fn name(&self) -> &'static str;

    /// Called once at startup with the cluster client.
    async fn initialize(&self, client: kube::Client) -> CoreResult<()>;

    /// Publish the challenge record.
    async fn present(&self, ch: &ChallengeRequest) -> CoreResult<()>;

    /// Remove the challenge record.
    async fn clean_up(&self, ch: &ChallengeRequest) -> CoreResult<()>;
}

/// Bunny DNS solver.
pub struct BunnySolver {
    zone_page_limit: u32,
    api_base_url: Option<String>,
    service: OnceLock<ChallengeService>,
}

impl BunnySolver {
    #[must_use]
    pub fn new(zone_page_limit: u32, api_base_url: Option<String>) -> Self {
        Self {
            zone_page_limit,
            api_base_url,
            service: OnceLock::new(),
        }
    }

    /// Wire the challenge service to `secret_store`. Later calls are ignored.
    fn install(&self, secret_store: Arc<dyn SecretStore>) {
        let factory = Arc::new(BunnyProviderFactory::new(self.api_base_url.clone()));
        let ctx = Arc::new(ServiceContext::new(secret_store, factory));
        let service =
            ChallengeService::with_resolver(ctx, ZoneResolver::new(self.zone_page_limit));

        if self.service.set(service).is_err() {
            tracing::warn!("Bunny solver already initialized, ignoring");
        }
    }

    fn service(&self) -> CoreResult<&ChallengeService> {
        self.service.get().ok_or(CoreError::NotInitialized)
    }
}

#[async_trait]
impl Solver for BunnySolver {
    fn name(&self) -> &'static str {
        "bunny"
    }

    async fn initialize(&self, client: kube::Client) -> CoreResult<()> {
        self.install(Arc::new(KubeSecretStore::new(client)));
        tracing::info!(
            "Bunny solver initialized (zone page limit {})",
            self.zone_page_limit
        );
        Ok(())
    }

    async fn present(&self, ch: &ChallengeRequest) -> CoreResult<()> {
        self.service()?.present(ch).await
    }

    async fn clean_up(&self, ch: &ChallengeRequest) -> CoreResult<()> {
        self.service()?.clean_up(ch).await
    }
}
