//! DNS-01 challenge handling: Present / CleanUp

use std::sync::Arc;

use bunny_webhook_provider::log_sanitizer::mask_secret;

use crate::error::{CoreError, CoreResult};
use crate::services::{find_txt_record, ServiceContext, ZoneResolver};
use crate::types::{ChallengeRequest, CreateDnsRecordRequest, DnsRecordType};

/// TTL (seconds) of published challenge records.
pub const CHALLENGE_RECORD_TTL: u32 = 120;

/// Record label of `fqdn` relative to `zone`.
///
/// `_acme-challenge.example.com.` in `example.com.` is `_acme-challenge`;
/// an FQDN equal to its zone yields the empty (apex) label.
pub fn challenge_record_name<'a>(fqdn: &'a str, zone: &str) -> &'a str {
    let relative = fqdn.strip_suffix(zone).unwrap_or(fqdn);
    relative.strip_suffix('.').unwrap_or(relative)
}

/// Publishes and removes ACME challenge TXT records.
pub struct ChallengeService {
    ctx: Arc<ServiceContext>,
    resolver: ZoneResolver,
}

impl ChallengeService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self::with_resolver(ctx, ZoneResolver::default())
    }

    #[must_use]
    pub fn with_resolver(ctx: Arc<ServiceContext>, resolver: ZoneResolver) -> Self {
        Self { ctx, resolver }
    }

    /// Create the challenge TXT record unless an identical one already exists.
    pub async fn present(&self, ch: &ChallengeRequest) -> CoreResult<()> {
        let provider = self.ctx.provider_for_challenge(ch).await?;
        let zone_id = self.resolver.resolve(provider.as_ref(), &ch.resolved_zone).await?;
        let name = challenge_record_name(&ch.resolved_fqdn, &ch.resolved_zone);

        let zone = provider
            .get_zone(zone_id)
            .await
            .map_err(CoreError::RecordFetch)?;

        if let Some(record) = find_txt_record(&zone.records, name, &ch.key) {
            log::info!(
                "TXT record {} already present in zone {zone_id} (record {}), skipping",
                ch.resolved_fqdn,
                record.id
            );
            return Ok(());
        }

        let req = CreateDnsRecordRequest {
            zone_id,
            record_type: DnsRecordType::Txt,
            name: name.to_string(),
            value: ch.key.clone(),
            ttl: CHALLENGE_RECORD_TTL,
        };
        let record = provider
            .create_record(&req)
            .await
            .map_err(CoreError::RecordCreate)?;

        log::info!(
            "Presented TXT record {} = {} in zone {zone_id} (record {})",
            ch.resolved_fqdn,
            mask_secret(&ch.key),
            record.id
        );
        Ok(())
    }

    /// Delete the challenge TXT record; succeeds without a delete call if it
    /// is already gone.
    pub async fn clean_up(&self, ch: &ChallengeRequest) -> CoreResult<()> {
        let provider = self.ctx.provider_for_challenge(ch).await?;
        let zone_id = self.resolver.resolve(provider.as_ref(), &ch.resolved_zone).await?;
        let name = challenge_record_name(&ch.resolved_fqdn, &ch.resolved_zone);

        let zone = provider
            .get_zone(zone_id)
            .await
            .map_err(CoreError::RecordFetch)?;

        let Some(record) = find_txt_record(&zone.records, name, &ch.key) else {
            log::info!(
                "No TXT record {} in zone {zone_id}, nothing to clean up",
                ch.resolved_fqdn
            );
            return Ok(());
        };

        provider
            .delete_record(zone_id, record.id)
            .await
            .map_err(CoreError::RecordDelete)?;

        log::info!(
            "Cleaned up TXT record {} in zone {zone_id} (record {})",
            ch.resolved_fqdn,
            record.id
        );
        Ok(())
    }
}
