//! cert-manager webhook solver for Bunny DNS
//!
//! Serves the ACME DNS-01 solver API under the configured API group and
//! publishes/removes challenge TXT records through the Bunny DNS API.

mod adapters;
mod api;
mod config;
mod logging;
mod server;
mod solver;
mod tls;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use config::ServerConfig;
use solver::{BunnySolver, Solver};

#[actix_web::main]
async fn main() -> ExitCode {
    // Config errors happen before logging is up; write to stderr
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bunny-webhook: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match logging::init(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("bunny-webhook: failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // kube and actix may each enable a different rustls backend; pin the process default first
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    tracing::info!(
        "Starting bunny-webhook {} for API group {}",
        env!("CARGO_PKG_VERSION"),
        config.group_name
    );

    let client = kube::Client::try_default()
        .await
        .context("failed to create Kubernetes client")?;

    let bunny = Arc::new(BunnySolver::new(
        config.zone_page_limit,
        config.api_base_url.clone(),
    ));
    bunny
        .initialize(client)
        .await
        .with_context(|| format!("failed to initialize solver {}", bunny.name()))?;

    let solvers: Vec<Arc<dyn Solver>> = vec![bunny];
    server::run(&config, solvers).await
}
