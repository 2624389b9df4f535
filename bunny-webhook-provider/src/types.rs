use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Pagination parameters for list operations.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, page_size = 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    /// Create pagination parameters for the given page.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
        }
    }
}

/// A single page of results from a list operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    ///
    /// Taken verbatim from the provider; it is not recomputed from
    /// `total_count`.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response with the provider-reported continuation flag.
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32, has_more: bool) -> Self {
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

// ============ DNS Record Types ============

/// DNS record type as encoded by the Bunny API.
///
/// Bunny identifies record types by small integers; unknown codes are kept
/// in [`Unknown`](Self::Unknown) so that listing a zone never fails on a
/// record type this crate does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Txt,
    Mx,
    Redirect,
    Flatten,
    PullZone,
    Srv,
    Caa,
    Ptr,
    Script,
    Ns,
    Unknown(u8),
}

impl DnsRecordType {
    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::A => 0,
            Self::Aaaa => 1,
            Self::Cname => 2,
            Self::Txt => 3,
            Self::Mx => 4,
            Self::Redirect => 5,
            Self::Flatten => 6,
            Self::PullZone => 7,
            Self::Srv => 8,
            Self::Caa => 9,
            Self::Ptr => 10,
            Self::Script => 11,
            Self::Ns => 12,
            Self::Unknown(code) => code,
        }
    }

    /// Map a wire code to a record type.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::A,
            1 => Self::Aaaa,
            2 => Self::Cname,
            3 => Self::Txt,
            4 => Self::Mx,
            5 => Self::Redirect,
            6 => Self::Flatten,
            7 => Self::PullZone,
            8 => Self::Srv,
            9 => Self::Caa,
            10 => Self::Ptr,
            11 => Self::Script,
            12 => Self::Ns,
            other => Self::Unknown(other),
        }
    }
}

impl From<u8> for DnsRecordType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<DnsRecordType> for u8 {
    fn from(record_type: DnsRecordType) -> Self {
        record_type.code()
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::Aaaa => write!(f, "AAAA"),
            Self::Cname => write!(f, "CNAME"),
            Self::Txt => write!(f, "TXT"),
            Self::Mx => write!(f, "MX"),
            Self::Redirect => write!(f, "REDIRECT"),
            Self::Flatten => write!(f, "FLATTEN"),
            Self::PullZone => write!(f, "PULLZONE"),
            Self::Srv => write!(f, "SRV"),
            Self::Caa => write!(f, "CAA"),
            Self::Ptr => write!(f, "PTR"),
            Self::Script => write!(f, "SCRIPT"),
            Self::Ns => write!(f, "NS"),
            Self::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

// ============ Zones & Records ============

/// A DNS zone as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Provider-assigned zone identifier.
    pub id: i64,
    /// Zone apex without a trailing dot (e.g., `"example.com"`).
    pub domain: String,
    /// Records in the zone. Empty when the listing endpoint omits them.
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

/// A DNS record inside a [`Zone`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-assigned record identifier.
    pub id: i64,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record name relative to the zone (`""` for the apex).
    pub name: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

/// Request to create a new DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnsRecordRequest {
    /// Zone to create the record in.
    pub zone_id: i64,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record name relative to the zone.
    pub name: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}
