//! cert-manager challenge request

use serde::{Deserialize, Serialize};

/// Action requested by cert-manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeAction {
    /// Publish the TXT record.
    Present,
    /// Remove the TXT record.
    CleanUp,
    /// Any action this solver does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single DNS-01 challenge as sent by cert-manager
/// (`acme.cert-manager.io/v1alpha1` `ChallengeRequest`).
///
/// Only lives for the duration of one Present/CleanUp call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Request identifier, echoed back in the response.
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub action: ChallengeAction,
    /// Challenge type, always `dns-01` for this solver.
    #[serde(rename = "type", default)]
    pub challenge_type: String,
    /// Domain being validated (e.g., `example.com`).
    #[serde(default)]
    pub dns_name: String,
    /// Proof token to publish as the TXT value.
    #[serde(default)]
    pub key: String,
    /// Namespace of the Issuer (or cert-manager's cluster resource namespace).
    #[serde(default)]
    pub resource_namespace: String,
    /// Fully qualified record name, dot-terminated (e.g., `_acme-challenge.example.com.`).
    #[serde(rename = "resolvedFQDN", default)]
    pub resolved_fqdn: String,
    /// Zone the record lives in, dot-terminated (e.g., `example.com.`).
    #[serde(default)]
    pub resolved_zone: String,
    #[serde(default)]
    pub allow_ambient_credentials: bool,
    /// Raw solver configuration from the Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}
