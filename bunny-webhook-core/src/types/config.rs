//! Solver configuration embedded in the Issuer

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Reference to one key of a Kubernetes `Secret` in the challenge's namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeySelector {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
}

/// Per-issuer solver configuration.
///
/// ```yaml
/// webhook:
///   solverName: bunny
///   config:
///     apiSecretRef:
///       name: bunny-credentials
///       key: api-key
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Secret holding the Bunny API access key.
    #[serde(default)]
    pub api_secret_ref: SecretKeySelector,
}

impl SolverConfig {
    /// Decode the raw config from a challenge.
    ///
    /// A missing (or `null`) config yields the default, whose empty secret
    /// reference is rejected later when the credential is loaded. No other
    /// validation is performed here.
    pub fn from_json(config: Option<&serde_json::Value>) -> CoreResult<Self> {
        match config {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => Self::deserialize(value).map_err(|e| CoreError::ConfigDecode(e.to_string())),
        }
    }
}
