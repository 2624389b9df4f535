//! Type definitions

mod challenge;
mod config;

pub use challenge::{ChallengeAction, ChallengeRequest};
pub use config::{SecretKeySelector, SolverConfig};

// Re-export provider library types
pub use bunny_webhook_provider::{
    CreateDnsRecordRequest, DnsRecord, DnsRecordType, PaginatedResponse, PaginationParams, Zone,
};
