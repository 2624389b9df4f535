//! Server configuration
//!
//! Loaded from a TOML file, then overridden by environment variables.
//! Validated once at startup; any error here is fatal.

use std::path::{Path, PathBuf};

use bunny_webhook_core::services::DEFAULT_MAX_ZONE_PAGES;
use serde::Deserialize;
use thiserror::Error;

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "BUNNY_WEBHOOK_CONFIG";
/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/bunny-webhook/config.toml";

const GROUP_NAME_ENV: &str = "GROUP_NAME";
const BIND_ADDRESS_ENV: &str = "BIND_ADDRESS";
const TLS_CERT_FILE_ENV: &str = "TLS_CERT_FILE";
const TLS_KEY_FILE_ENV: &str = "TLS_KEY_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    #[error("{0} must be specified")]
    Missing(&'static str),

    #[error("invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// API group the solver is served under (e.g. `acme.example.com`).
    pub group_name: String,
    pub bind_address: String,
    /// Actix worker count; one per CPU when unset.
    pub workers: Option<usize>,
    /// Upper bound on zone listing pages per lookup.
    pub zone_page_limit: u32,
    /// Bunny API endpoint override.
    pub api_base_url: Option<String>,
    pub tls: Option<TlsConfig>,
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            group_name: String::new(),
            bind_address: "0.0.0.0:443".to_string(),
            workers: None,
            zone_page_limit: DEFAULT_MAX_ZONE_PAGES,
            api_base_url: None,
            tls: None,
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    pub cert_file: PathBuf,
    pub key_file: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
    /// Write daily-rotated log files here in addition to stdout.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            directory: None,
        }
    }
}

impl ServerConfig {
    /// Load from the configured path (if it exists), apply process env
    /// overrides and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_with(explicit.as_deref(), |key| std::env::var(key).ok())
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load_with(
        explicit_path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(group) = env(GROUP_NAME_ENV) {
            self.group_name = group;
        }
        if let Some(addr) = env(BIND_ADDRESS_ENV) {
            self.bind_address = addr;
        }

        // Certificate and key can be overridden separately
        let cert = env(TLS_CERT_FILE_ENV).map(PathBuf::from);
        let key = env(TLS_KEY_FILE_ENV).map(PathBuf::from);
        if cert.is_some() || key.is_some() {
            let current = self.tls.take();
            self.tls = Some(TlsConfig {
                cert_file: cert
                    .or_else(|| current.as_ref().map(|t| t.cert_file.clone()))
                    .unwrap_or_default(),
                key_file: key
                    .or_else(|| current.map(|t| t.key_file))
                    .unwrap_or_default(),
            });
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let group = self.group_name.trim();
        if group.is_empty() {
            return Err(ConfigError::Missing("GROUP_NAME"));
        }
        if group.contains('/') || group.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                field: "group_name",
                message: format!("{:?} is not a valid API group name", self.group_name),
            });
        }
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Missing("bind_address"));
        }
        if self.zone_page_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "zone_page_limit",
                message: "must be at least 1".to_string(),
            });
        }
        if self.workers == Some(0) {
            return Err(ConfigError::Invalid {
                field: "workers",
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(tls) = &self.tls {
            if tls.cert_file.as_os_str().is_empty() {
                return Err(ConfigError::Missing("tls.cert_file"));
            }
            if tls.key_file.as_os_str().is_empty() {
                return Err(ConfigError::Missing("tls.key_file"));
            }
        }
        Ok(())
    }
}
