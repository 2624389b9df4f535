//! Bunny `DnsProvider` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::normalize_domain_name;
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{
    CreateDnsRecordRequest, DnsRecord, DnsRecordType, PaginatedResponse, PaginationParams, Zone,
};

use super::{
    BunnyAddRecordBody, BunnyDnsRecord, BunnyProvider, BunnyZone, BunnyZoneList,
    MAX_PAGE_SIZE_ZONES,
};

impl BunnyProvider {
    /// Convert a Bunny zone into a `Zone`
    pub(crate) fn bunny_zone_to_zone(zone: BunnyZone) -> Zone {
        Zone {
            id: zone.id,
            domain: normalize_domain_name(&zone.domain).to_string(),
            records: zone
                .records
                .into_iter()
                .map(Self::bunny_record_to_dns_record)
                .collect(),
        }
    }

    /// Convert a Bunny record into a `DnsRecord`; apex records get an empty name
    pub(crate) fn bunny_record_to_dns_record(record: BunnyDnsRecord) -> DnsRecord {
        DnsRecord {
            id: record.id,
            record_type: DnsRecordType::from_code(record.record_type),
            name: record.name.unwrap_or_default(),
            value: record.value.unwrap_or_default(),
            ttl: record.ttl,
        }
    }
}

#[async_trait]
impl DnsProvider for BunnyProvider {
    fn id(&self) -> &'static str {
        "bunny"
    }

    async fn list_zones(&self, params: &PaginationParams) -> Result<PaginatedResponse<Zone>> {
        let params = params.validated(MAX_PAGE_SIZE_ZONES);
        let path = format!("/dnszone?page={}&perPage={}", params.page, params.page_size);

        let list: BunnyZoneList = self.get(&path, ErrorContext::default()).await?;
        let zones = list.items.into_iter().map(Self::bunny_zone_to_zone).collect();
        // Some responses omit CurrentPage
        let page = if list.current_page == 0 {
            params.page
        } else {
            list.current_page
        };

        Ok(PaginatedResponse::new(
            zones,
            page,
            params.page_size,
            list.total_items,
            list.has_more_items,
        ))
    }

    async fn get_zone(&self, zone_id: i64) -> Result<Zone> {
        let zone: BunnyZone = self
            .get(&format!("/dnszone/{zone_id}"), ErrorContext::zone(zone_id))
            .await?;
        Ok(Self::bunny_zone_to_zone(zone))
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord> {
        let body = BunnyAddRecordBody {
            record_type: req.record_type.code(),
            ttl: req.ttl,
            value: &req.value,
            name: &req.name,
        };

        let record: BunnyDnsRecord = self
            .put(
                &format!("/dnszone/{}/records", req.zone_id),
                &body,
                ErrorContext::zone(req.zone_id),
            )
            .await?;

        Ok(Self::bunny_record_to_dns_record(record))
    }

    async fn delete_record(&self, zone_id: i64, record_id: i64) -> Result<()> {
        self.delete(
            &format!("/dnszone/{zone_id}/records/{record_id}"),
            ErrorContext::record(zone_id, record_id),
        )
        .await
    }
}
