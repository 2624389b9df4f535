//! TXT record matching

use crate::types::{DnsRecord, DnsRecordType};

/// Find the first TXT record with exactly this name and value.
///
/// Comparison is exact and case-sensitive on both fields. `None` simply
/// means no such record exists.
pub fn find_txt_record<'a>(records: &'a [DnsRecord], name: &str, value: &str) -> Option<&'a DnsRecord> {
    records
        .iter()
        .find(|r| r.record_type == DnsRecordType::Txt && r.name == name && r.value == value)
}
