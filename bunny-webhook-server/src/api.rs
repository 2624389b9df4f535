//! Wire types of the cert-manager webhook API
//!
//! Discovery documents reuse the Kubernetes `meta/v1` types.

use bunny_webhook_core::types::ChallengeRequest;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    APIGroup, APIGroupList, APIResource, APIResourceList, GroupVersionForDiscovery, Status,
};
use serde::{Deserialize, Serialize};

/// cert-manager's webhook API version.
pub const SOLVER_API_VERSION: &str = "v1alpha1";
/// `apiVersion` of challenge payloads.
pub const CHALLENGE_API_VERSION: &str = "acme.cert-manager.io/v1alpha1";
pub const CHALLENGE_KIND: &str = "ChallengePayload";

const STATUS_FAILURE: &str = "Failure";

/// Request and response envelope exchanged with cert-manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePayload {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ChallengeRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ChallengeResponse>,
}

/// Outcome of one challenge request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResponse {
    /// Echo of the request UID.
    pub uid: String,
    pub success: bool,
    /// Failure details; absent on success.
    #[serde(rename = "status", default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Status>,
}

impl ChallengeResponse {
    pub fn success(uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            success: true,
            result: None,
        }
    }

    pub fn failure(uid: &str, message: String) -> Self {
        Self {
            uid: uid.to_string(),
            success: false,
            result: Some(failure_status(500, "InternalError", message)),
        }
    }
}

/// A `meta/v1 Status` with `status: Failure`.
pub fn failure_status(code: i32, reason: &str, message: String) -> Status {
    Status {
        status: Some(STATUS_FAILURE.to_string()),
        message: Some(message),
        reason: Some(reason.to_string()),
        code: Some(code),
        ..Status::default()
    }
}

fn group_version(group: &str) -> GroupVersionForDiscovery {
    GroupVersionForDiscovery {
        group_version: format!("{group}/{SOLVER_API_VERSION}"),
        version: SOLVER_API_VERSION.to_string(),
    }
}

pub fn api_group(group: &str) -> APIGroup {
    APIGroup {
        name: group.to_string(),
        preferred_version: Some(group_version(group)),
        versions: vec![group_version(group)],
        ..APIGroup::default()
    }
}

pub fn api_group_list(group: &str) -> APIGroupList {
    APIGroupList {
        groups: vec![api_group(group)],
    }
}

/// One cluster-scoped, create-only resource per solver.
pub fn api_resource_list<'a>(group: &str, solvers: impl IntoIterator<Item = &'a str>) -> APIResourceList {
    APIResourceList {
        group_version: format!("{group}/{SOLVER_API_VERSION}"),
        resources: solvers
            .into_iter()
            .map(|name| APIResource {
                name: name.to_string(),
                singular_name: name.to_string(),
                namespaced: false,
                kind: CHALLENGE_KIND.to_string(),
                verbs: vec!["create".to_string()],
                ..APIResource::default()
            })
            .collect(),
    }
}
