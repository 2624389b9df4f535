use super::*;

use std::sync::Mutex;

use actix_web::http::StatusCode;
use actix_web::test;
use async_trait::async_trait;
use bunny_webhook_core::CoreError;
use bunny_webhook_core::types::ChallengeRequest;
use serde_json::{Value, json};

const GROUP: &str = "acme.example.com";

/// Records every call; fails all of them when `fail` is set.
#[derive(Default)]
struct RecordingSolver {
    calls: Mutex<Vec<(ChallengeAction, String)>>,
    fail: bool,
}

impl RecordingSolver {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(ChallengeAction, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, ch: &ChallengeRequest) -> CoreResult<()> {
        self.calls.lock().unwrap().push((ch.action, ch.uid.clone()));
        if self.fail {
            Err(CoreError::ZoneNotFound(ch.resolved_zone.clone()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Solver for RecordingSolver {
    fn name(&self) -> &'static str {
        "bunny"
    }

    async fn initialize(&self, _client: kube::Client) -> CoreResult<()> {
        Ok(())
    }

    async fn present(&self, ch: &ChallengeRequest) -> CoreResult<()> {
        self.record(ch)
    }

    async fn clean_up(&self, ch: &ChallengeRequest) -> CoreResult<()> {
        self.record(ch)
    }
}

fn app_state(solver: Arc<RecordingSolver>) -> web::Data<AppState> {
    let solver: Arc<dyn Solver> = solver;
    web::Data::new(AppState::new(GROUP.to_string(), vec![solver]))
}

fn payload(action: &str, uid: &str) -> Value {
    json!({
        "apiVersion": CHALLENGE_API_VERSION,
        "kind": CHALLENGE_KIND,
        "request": {
            "uid": uid,
            "action": action,
            "type": "dns-01",
            "dnsName": "example.com",
            "key": "abc123",
            "resourceNamespace": "cert-manager",
            "resolvedFQDN": "_acme-challenge.example.com.",
            "resolvedZone": "example.com.",
            "config": { "apiSecretRef": { "name": "bunny-credentials", "key": "api-key" } }
        }
    })
}

#[actix_web::test]
async fn health_probes_return_ok() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::default()))
            .configure(configure),
    )
    .await;

    for path in ["/healthz", "/livez", "/readyz"] {
        let req = test::TestRequest::get().uri(path).to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "ok");
    }
}

#[actix_web::test]
async fn discovery_lists_solver_resource() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::default()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/apis").to_request();
    let groups: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(groups["groups"][0]["name"], GROUP);
    assert_eq!(
        groups["groups"][0]["preferredVersion"]["groupVersion"],
        "acme.example.com/v1alpha1"
    );

    let req = test::TestRequest::get()
        .uri("/apis/acme.example.com")
        .to_request();
    let group: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(group["name"], GROUP);
    assert_eq!(group["versions"][0]["version"], "v1alpha1");

    let req = test::TestRequest::get()
        .uri("/apis/acme.example.com/v1alpha1")
        .to_request();
    let resources: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resources["groupVersion"], "acme.example.com/v1alpha1");
    assert_eq!(resources["resources"][0]["name"], "bunny");
    assert_eq!(resources["resources"][0]["kind"], "ChallengePayload");
    assert_eq!(resources["resources"][0]["verbs"], json!(["create"]));
}

#[actix_web::test]
async fn unknown_group_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::default()))
            .configure(configure),
    )
    .await;

    for uri in ["/apis/other.example.com", "/apis/acme.example.com/v1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["reason"], "NotFound");
    }
}

#[actix_web::test]
async fn present_and_clean_up_dispatch_to_solver() {
    let solver = Arc::new(RecordingSolver::default());
    let app = test::init_service(
        App::new()
            .app_data(app_state(solver.clone()))
            .configure(configure),
    )
    .await;

    for (action, uid) in [("Present", "uid-1"), ("CleanUp", "uid-2")] {
        let req = test::TestRequest::post()
            .uri("/apis/acme.example.com/v1alpha1/bunny")
            .set_json(payload(action, uid))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["apiVersion"], CHALLENGE_API_VERSION);
        assert_eq!(body["kind"], CHALLENGE_KIND);
        assert_eq!(body["response"]["uid"], uid);
        assert_eq!(body["response"]["success"], true);
        assert!(body["response"].get("status").is_none());
    }

    assert_eq!(
        solver.calls(),
        vec![
            (ChallengeAction::Present, "uid-1".to_string()),
            (ChallengeAction::CleanUp, "uid-2".to_string()),
        ]
    );
}

#[actix_web::test]
async fn solver_error_becomes_failed_response() {
    let solver = Arc::new(RecordingSolver::failing());
    let app = test::init_service(
        App::new()
            .app_data(app_state(solver))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/apis/acme.example.com/v1alpha1/bunny")
        .set_json(payload("Present", "uid-3"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["response"]["success"], false);
    assert_eq!(body["response"]["status"]["status"], "Failure");
    assert_eq!(
        body["response"]["status"]["message"],
        "failed to get zone id from zone name: example.com."
    );
}

#[actix_web::test]
async fn unknown_action_is_rejected_without_solver_call() {
    let solver = Arc::new(RecordingSolver::default());
    let app = test::init_service(
        App::new()
            .app_data(app_state(solver.clone()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/apis/acme.example.com/v1alpha1/bunny")
        .set_json(payload("Rotate", "uid-4"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["response"]["success"], false);
    assert!(solver.calls().is_empty());
}

#[actix_web::test]
async fn unknown_solver_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::default()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/apis/acme.example.com/v1alpha1/route53")
        .set_json(payload("Present", "uid-5"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn payload_without_request_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::default()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/apis/acme.example.com/v1alpha1/bunny")
        .set_json(json!({ "apiVersion": CHALLENGE_API_VERSION, "kind": CHALLENGE_KIND }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/apis/acme.example.com/v1alpha1/bunny")
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
