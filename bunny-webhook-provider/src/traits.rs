use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateDnsRecordRequest, DnsRecord, PaginatedResponse, PaginationParams, Zone};

/// Raw API error (internal)
#[derive(Debug, Clone, Default)]
pub(crate) struct RawApiError {
    /// HTTP status code
    pub status: Option<u16>,
    /// Error code (Bunny `ErrorKey`)
    pub code: Option<String>,
    /// Offending field (Bunny `Field`)
    pub field: Option<String>,
    /// Raw error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code.filter(|c| !c.is_empty());
        self
    }

    pub fn with_field(mut self, field: Option<String>) -> Self {
        self.field = field.filter(|f| !f.is_empty());
        self
    }
}

/// Request context used when mapping errors (internal)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record ID (for `RecordNotFound`)
    pub record_id: Option<String>,
    /// Zone ID (for `ZoneNotFound`)
    pub zone: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: i64) -> Self {
        Self {
            zone: Some(zone_id.to_string()),
            ..Self::default()
        }
    }

    pub fn record(zone_id: i64, record_id: i64) -> Self {
        Self {
            zone: Some(zone_id.to_string()),
            record_id: Some(record_id.to_string()),
        }
    }
}

/// Maps raw API errors onto `ProviderError` (internal)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Response body could not be parsed
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Request body could not be serialized
    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Fallback for unclassified errors
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS provider operations needed to solve DNS-01 challenges.
///
/// Implementations are cheap to construct and hold no state between calls
/// beyond their HTTP client and credentials.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// List zones, one page at a time.
    ///
    /// The returned [`PaginatedResponse::has_more`] is the provider's own
    /// continuation flag.
    async fn list_zones(&self, params: &PaginationParams) -> Result<PaginatedResponse<Zone>>;

    /// Fetch a zone including its full record set.
    async fn get_zone(&self, zone_id: i64) -> Result<Zone>;

    /// Create a DNS record.
    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord>;

    /// Delete a DNS record by ID.
    async fn delete_record(&self, zone_id: i64, record_id: i64) -> Result<()>;
}
