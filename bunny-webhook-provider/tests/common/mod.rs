//! Shared helpers for live API tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use bunny_webhook_provider::{DnsProvider, PaginationParams, create_provider};

/// Skip the test when an environment variable is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Unique record name for one test run
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_acme-test-{}", &uuid.to_string()[..8])
}

/// Provider plus the domain under test
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
    pub zone_id: Option<i64>,
}

impl TestContext {
    /// Build the context from the environment
    pub fn bunny() -> Option<Self> {
        let access_key = env::var("BUNNY_ACCESS_KEY").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let provider = create_provider(access_key).ok()?;

        Some(Self {
            provider,
            domain,
            zone_id: None,
        })
    }

    /// Page through zones to find the test domain's ID
    pub async fn find_zone_id(&mut self) -> Option<i64> {
        if let Some(id) = self.zone_id {
            return Some(id);
        }

        let mut page = 1;
        loop {
            let zones = self
                .provider
                .list_zones(&PaginationParams::new(page, 50))
                .await
                .ok()?;
            if let Some(zone) = zones.items.iter().find(|z| z.domain == self.domain) {
                self.zone_id = Some(zone.id);
                return self.zone_id;
            }
            if !zones.has_more || page >= 20 {
                return None;
            }
            page += 1;
        }
    }
}
