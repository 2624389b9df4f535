//! TLS server configuration from PEM files

use std::sync::Arc;

use anyhow::Context;
use rustls::ServerConfig;
use rustls::crypto::ring;
use rustls_pki_types::pem::PemObject;
use rustls_pki_types::{CertificateDer, PrivateKeyDer};

use crate::config::TlsConfig;

/// Build a rustls server config from the certificate chain and private key.
pub fn load_server_config(tls: &TlsConfig) -> anyhow::Result<ServerConfig> {
    let certs = CertificateDer::pem_file_iter(&tls.cert_file)
        .with_context(|| format!("failed to open certificate {}", tls.cert_file.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to parse certificate {}", tls.cert_file.display()))?;
    if certs.is_empty() {
        anyhow::bail!("no certificates found in {}", tls.cert_file.display());
    }

    let key = PrivateKeyDer::from_pem_file(&tls.key_file)
        .with_context(|| format!("failed to load private key {}", tls.key_file.display()))?;

    let config = ServerConfig::builder_with_provider(Arc::new(ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("certificate and private key do not form a valid pair")?;

    Ok(config)
}
