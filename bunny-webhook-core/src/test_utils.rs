//! Test helpers
//!
//! Mock implementations and shortcut constructors for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bunny_webhook_provider::{
    CreateDnsRecordRequest, DnsProvider, DnsRecord, DnsRecordType, PaginatedResponse,
    PaginationParams, ProviderError, Result as ProviderResult, Zone,
};

use crate::error::{CoreError, CoreResult};
use crate::services::{ChallengeService, ServiceContext};
use crate::traits::{ProviderFactory, SecretData, SecretStore};
use crate::types::{ChallengeAction, ChallengeRequest};

pub const TEST_NAMESPACE: &str = "cert-manager";
pub const TEST_SECRET: &str = "bunny-credentials";
pub const TEST_SECRET_KEY: &str = "api-key";
pub const TEST_ACCESS_KEY: &str = "bunny-access-key-0001";

// ===== MockDnsProvider =====

#[derive(Default)]
struct MockState {
    zones: Vec<Zone>,
    page_requests: Vec<u32>,
    get_zone_calls: Vec<i64>,
    created: Vec<CreateDnsRecordRequest>,
    deleted: Vec<(i64, i64)>,
    always_has_more: bool,
    next_record_id: i64,
    list_error: Option<ProviderError>,
    get_zone_error: Option<ProviderError>,
    create_error: Option<ProviderError>,
    delete_error: Option<ProviderError>,
}

/// In-memory provider that records every call made against it.
pub struct MockDnsProvider {
    state: Mutex<MockState>,
}

impl MockDnsProvider {
    pub fn with_zones(zones: Vec<Zone>) -> Self {
        Self {
            state: Mutex::new(MockState {
                zones,
                next_record_id: 1000,
                ..MockState::default()
            }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Report `has_more = true` on every page
    pub fn set_always_has_more(&self, value: bool) {
        self.state().always_has_more = value;
    }

    pub fn fail_list_zones(&self, err: ProviderError) {
        self.state().list_error = Some(err);
    }

    pub fn fail_get_zone(&self, err: ProviderError) {
        self.state().get_zone_error = Some(err);
    }

    pub fn fail_create_record(&self, err: ProviderError) {
        self.state().create_error = Some(err);
    }

    pub fn fail_delete_record(&self, err: ProviderError) {
        self.state().delete_error = Some(err);
    }

    /// Page numbers requested from `list_zones`, in order.
    pub fn page_requests(&self) -> Vec<u32> {
        self.state().page_requests.clone()
    }

    pub fn get_zone_calls(&self) -> Vec<i64> {
        self.state().get_zone_calls.clone()
    }

    pub fn created(&self) -> Vec<CreateDnsRecordRequest> {
        self.state().created.clone()
    }

    /// `(zone_id, record_id)` pairs passed to `delete_record`.
    pub fn deleted(&self) -> Vec<(i64, i64)> {
        self.state().deleted.clone()
    }

    pub fn records(&self, zone_id: i64) -> Vec<DnsRecord> {
        self.state()
            .zones
            .iter()
            .find(|z| z.id == zone_id)
            .map(|z| z.records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_zones(&self, params: &PaginationParams) -> ProviderResult<PaginatedResponse<Zone>> {
        let mut state = self.state();
        state.page_requests.push(params.page);
        if let Some(err) = state.list_error.clone() {
            return Err(err);
        }

        let size = params.page_size as usize;
        let start = (params.page as usize - 1) * size;
        let end = (start + size).min(state.zones.len());
        let items = state
            .zones
            .get(start..end)
            .map(<[Zone]>::to_vec)
            .unwrap_or_default();
        let total = state.zones.len() as u32;
        let has_more = state.always_has_more || end < state.zones.len();

        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.page_size,
            total,
            has_more,
        ))
    }

    async fn get_zone(&self, zone_id: i64) -> ProviderResult<Zone> {
        let mut state = self.state();
        state.get_zone_calls.push(zone_id);
        if let Some(err) = state.get_zone_error.clone() {
            return Err(err);
        }
        state
            .zones
            .iter()
            .find(|z| z.id == zone_id)
            .cloned()
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: "mock".to_string(),
                zone: zone_id.to_string(),
                raw_message: None,
            })
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> ProviderResult<DnsRecord> {
        let mut state = self.state();
        state.created.push(req.clone());
        if let Some(err) = state.create_error.clone() {
            return Err(err);
        }

        state.next_record_id += 1;
        let record = DnsRecord {
            id: state.next_record_id,
            record_type: req.record_type,
            name: req.name.clone(),
            value: req.value.clone(),
            ttl: req.ttl,
        };
        let zone = state
            .zones
            .iter_mut()
            .find(|z| z.id == req.zone_id)
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: "mock".to_string(),
                zone: req.zone_id.to_string(),
                raw_message: None,
            })?;
        zone.records.push(record.clone());
        Ok(record)
    }

    async fn delete_record(&self, zone_id: i64, record_id: i64) -> ProviderResult<()> {
        let mut state = self.state();
        state.deleted.push((zone_id, record_id));
        if let Some(err) = state.delete_error.clone() {
            return Err(err);
        }

        let zone = state.zones.iter_mut().find(|z| z.id == zone_id);
        match zone {
            Some(zone) if zone.records.iter().any(|r| r.id == record_id) => {
                zone.records.retain(|r| r.id != record_id);
                Ok(())
            }
            _ => Err(ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: record_id.to_string(),
                raw_message: None,
            }),
        }
    }
}

// ===== MockSecretStore =====

#[derive(Default)]
pub struct MockSecretStore {
    secrets: HashMap<(String, String), SecretData>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, namespace: &str, name: &str, key: &str, value: &str) -> Self {
        self.secrets
            .entry((namespace.to_string(), name.to_string()))
            .or_default()
            .insert(key.to_string(), value.as_bytes().to_vec());
        self
    }
}

#[async_trait]
impl SecretStore for MockSecretStore {
    async fn get(&self, namespace: &str, name: &str) -> CoreResult<SecretData> {
        self.secrets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| CoreError::SecretLookup {
                namespace: namespace.to_string(),
                name: name.to_string(),
                message: "secrets not found".to_string(),
            })
    }
}

// ===== MockProviderFactory =====

/// Hands out the same mock provider for every access key.
pub struct MockProviderFactory {
    provider: Arc<MockDnsProvider>,
    access_keys: Mutex<Vec<String>>,
}

impl MockProviderFactory {
    pub fn new(provider: Arc<MockDnsProvider>) -> Self {
        Self {
            provider,
            access_keys: Mutex::new(Vec::new()),
        }
    }

    pub fn access_keys(&self) -> Vec<String> {
        self.access_keys.lock().unwrap().clone()
    }
}

impl ProviderFactory for MockProviderFactory {
    fn create(&self, access_key: String) -> CoreResult<Arc<dyn DnsProvider>> {
        self.access_keys.lock().unwrap().push(access_key);
        Ok(self.provider.clone())
    }
}

// ===== Constructors =====

pub fn zone(id: i64, domain: &str) -> Zone {
    Zone {
        id,
        domain: domain.to_string(),
        records: Vec::new(),
    }
}

/// `zone1.example` .. `zone{n}.example`, IDs equal to the index
pub fn numbered_zones(n: i64) -> Vec<Zone> {
    (1..=n).map(|i| zone(i, &format!("zone{i}.example"))).collect()
}

pub fn txt_record(id: i64, name: &str, value: &str) -> DnsRecord {
    DnsRecord {
        id,
        record_type: DnsRecordType::Txt,
        name: name.to_string(),
        value: value.to_string(),
        ttl: 120,
    }
}

pub fn default_secret_store() -> MockSecretStore {
    MockSecretStore::new().with_entry(TEST_NAMESPACE, TEST_SECRET, TEST_SECRET_KEY, TEST_ACCESS_KEY)
}

pub struct TestHarness {
    pub service: ChallengeService,
    pub provider: Arc<MockDnsProvider>,
    pub factory: Arc<MockProviderFactory>,
}

/// `ChallengeService` wired to mock dependencies
pub fn create_test_service(zones: Vec<Zone>) -> TestHarness {
    create_test_service_with_store(zones, default_secret_store())
}

pub fn create_test_service_with_store(zones: Vec<Zone>, store: MockSecretStore) -> TestHarness {
    let provider = Arc::new(MockDnsProvider::with_zones(zones));
    let factory = Arc::new(MockProviderFactory::new(provider.clone()));
    let ctx = Arc::new(ServiceContext::new(Arc::new(store), factory.clone()));
    TestHarness {
        service: ChallengeService::new(ctx),
        provider,
        factory,
    }
}

/// `_acme-challenge.{zone}` challenge referencing the default test secret.
pub fn test_challenge(action: ChallengeAction, fqdn: &str, zone: &str, key: &str) -> ChallengeRequest {
    ChallengeRequest {
        uid: "test-uid".to_string(),
        action,
        challenge_type: "dns-01".to_string(),
        dns_name: zone.trim_end_matches('.').to_string(),
        key: key.to_string(),
        resource_namespace: TEST_NAMESPACE.to_string(),
        resolved_fqdn: fqdn.to_string(),
        resolved_zone: zone.to_string(),
        allow_ambient_credentials: false,
        config: Some(serde_json::json!({
            "apiSecretRef": { "name": TEST_SECRET, "key": TEST_SECRET_KEY }
        })),
    }
}
