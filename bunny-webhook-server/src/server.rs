//! HTTP surface of the webhook
//!
//! Serves the discovery documents the aggregation layer needs, the challenge
//! endpoint for every solver, and health probes.

use std::sync::Arc;

use actix_web::{App, HttpResponse, HttpServer, Responder, middleware, web};
use bunny_webhook_core::CoreResult;
use bunny_webhook_core::types::ChallengeAction;

use crate::api::{
    self, CHALLENGE_API_VERSION, CHALLENGE_KIND, ChallengePayload, ChallengeResponse,
    SOLVER_API_VERSION,
};
use crate::config::ServerConfig;
use crate::solver::Solver;
use crate::tls;

/// Shared, read-only handler state.
pub struct AppState {
    group_name: String,
    solvers: Vec<Arc<dyn Solver>>,
}

impl AppState {
    pub fn new(group_name: String, solvers: Vec<Arc<dyn Solver>>) -> Self {
        Self {
            group_name,
            solvers,
        }
    }

    fn solver(&self, name: &str) -> Option<&Arc<dyn Solver>> {
        self.solvers.iter().find(|s| s.name() == name)
    }

    fn serves(&self, group: &str, version: &str) -> bool {
        group == self.group_name && version == SOLVER_API_VERSION
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health))
        .route("/livez", web::get().to(health))
        .route("/readyz", web::get().to(health))
        .route("/apis", web::get().to(group_list))
        .route("/apis/{group}", web::get().to(group))
        .route("/apis/{group}/{version}", web::get().to(resource_list))
        .route("/apis/{group}/{version}/{resource}", web::post().to(solve));
}

/// Bind and serve until shutdown.
pub async fn run(config: &ServerConfig, solvers: Vec<Arc<dyn Solver>>) -> anyhow::Result<()> {
    let state = web::Data::new(AppState::new(config.group_name.clone(), solvers));

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default().exclude_regex("^/(healthz|livez|readyz)$"))
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = if let Some(tls_config) = &config.tls {
        let rustls_config = tls::load_server_config(tls_config)?;
        tracing::info!("Serving HTTPS on {}", config.bind_address);
        server.bind_rustls_0_23(config.bind_address.as_str(), rustls_config)?
    } else {
        tracing::warn!(
            "No TLS configuration, serving plain HTTP on {}",
            config.bind_address
        );
        server.bind(config.bind_address.as_str())?
    };

    server.run().await?;
    Ok(())
}

async fn health() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

async fn group_list(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(api::api_group_list(&state.group_name))
}

async fn group(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let group = path.into_inner();
    if group != state.group_name {
        return not_found(format!("the server could not find the API group {group:?}"));
    }
    HttpResponse::Ok().json(api::api_group(&state.group_name))
}

async fn resource_list(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (group, version) = path.into_inner();
    if !state.serves(&group, &version) {
        return not_found(format!("the server could not find {group}/{version}"));
    }
    HttpResponse::Ok().json(api::api_resource_list(
        &state.group_name,
        state.solvers.iter().map(|s| s.name()),
    ))
}

async fn solve(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    body: web::Bytes,
) -> HttpResponse {
    let (group, version, resource) = path.into_inner();
    if !state.serves(&group, &version) {
        return not_found(format!("the server could not find {group}/{version}"));
    }
    let Some(solver) = state.solver(&resource) else {
        return not_found(format!("no solver registered with name {resource:?}"));
    };

    let mut payload: ChallengePayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => return bad_request(format!("failed to decode challenge payload: {e}")),
    };
    let Some(request) = payload.request.as_ref() else {
        return bad_request("challenge payload has no request".to_string());
    };

    tracing::info!(
        uid = %request.uid,
        fqdn = %request.resolved_fqdn,
        "Handling {:?} for solver {}",
        request.action,
        solver.name()
    );

    let response = match request.action {
        ChallengeAction::Present => outcome(&request.uid, solver.present(request).await),
        ChallengeAction::CleanUp => outcome(&request.uid, solver.clean_up(request).await),
        ChallengeAction::Unknown => {
            tracing::warn!(uid = %request.uid, "Unsupported challenge action");
            ChallengeResponse::failure(&request.uid, "unsupported challenge action".to_string())
        }
    };

    if payload.api_version.is_empty() {
        payload.api_version = CHALLENGE_API_VERSION.to_string();
    }
    if payload.kind.is_empty() {
        payload.kind = CHALLENGE_KIND.to_string();
    }
    payload.response = Some(response);
    HttpResponse::Ok().json(payload)
}

fn outcome(uid: &str, result: CoreResult<()>) -> ChallengeResponse {
    match result {
        Ok(()) => ChallengeResponse::success(uid),
        Err(e) => {
            if e.is_expected() {
                tracing::warn!(uid, "Challenge failed: {e}");
            } else {
                tracing::error!(uid, "Challenge failed: {e}");
            }
            ChallengeResponse::failure(uid, e.to_string())
        }
    }
}

fn not_found(message: String) -> HttpResponse {
    HttpResponse::NotFound().json(api::failure_status(404, "NotFound", message))
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(api::failure_status(400, "BadRequest", message))
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
