//! Bunny error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::BunnyProvider;

/// Bunny signals the error class through the HTTP status; `ErrorKey`/`Field` only add detail
impl ProviderErrorMapper for BunnyProvider {
    fn provider_name(&self) -> &'static str {
        "bunny"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        match raw.status {
            Some(401) => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },
            Some(403) => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },
            // 404 on a record delete means the record, otherwise the zone
            Some(404) => match (context.record_id, context.zone) {
                (Some(record_id), _) => ProviderError::RecordNotFound {
                    provider,
                    record_id,
                    raw_message: Some(raw.message),
                },
                (None, Some(zone)) => ProviderError::ZoneNotFound {
                    provider,
                    zone,
                    raw_message: Some(raw.message),
                },
                (None, None) => self.unknown_error(raw),
            },
            Some(400) if raw.field.is_some() => ProviderError::InvalidParameter {
                provider,
                param: raw.field.unwrap_or_default(),
                detail: raw.message,
            },
            _ => self.unknown_error(raw),
        }
    }
}
