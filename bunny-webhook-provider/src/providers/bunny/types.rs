//! Bunny API data structures
//!
//! Bunny JSON fields are `PascalCase`; unlisted fields are ignored.

use serde::{Deserialize, Serialize};

/// `GET /dnszone` page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyZoneList {
    #[serde(default)]
    pub items: Vec<BunnyZone>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub has_more_items: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyZone {
    pub id: i64,
    pub domain: String,
    #[serde(default)]
    pub records: Vec<BunnyDnsRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyDnsRecord {
    pub id: i64,
    #[serde(rename = "Type")]
    pub record_type: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub ttl: u32,
}

/// `PUT /dnszone/{id}/records` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyAddRecordBody<'a> {
    #[serde(rename = "Type")]
    pub record_type: u8,
    pub ttl: u32,
    pub value: &'a str,
    pub name: &'a str,
}

/// Bunny error body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyErrorResponse {
    #[serde(default)]
    pub error_key: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
