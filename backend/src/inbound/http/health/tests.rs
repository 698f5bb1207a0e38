//! Tests for health handlers.

use std::sync::Arc;

use super::*;
use crate::domain::{HealthStatus, HealthStatusValidationError};
use crate::inbound::http::test_utils::MockPorts;
use actix_web::{App, test as actix_test};
use chrono::TimeZone;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::{Value, json};

#[fixture]
fn checked_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 15, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn report(http_status: u16, server_ip: &str, checked_at: DateTime<Utc>) -> HealthReport {
    let status =
        HealthStatus::try_new(http_status, server_ip, "Service is healthy").expect("valid status");
    HealthReport::new(status, checked_at)
}

async fn call_health(ports: MockPorts, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .route("/health", web::get().to(health))
            .route("/healthz", web::get().to(health)),
    )
    .await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[rstest]
#[case("/health")]
#[case("/healthz")]
#[actix_web::test]
async fn health_reports_status_address_and_timestamp(
    #[case] uri: &str,
    checked_at: DateTime<Utc>,
) {
    let mut ports = MockPorts::default();
    let report = report(200, "172.16.0.10", checked_at);
    ports
        .check_health
        .expect_execute()
        .times(1)
        .return_once(move || Ok(report));

    let (status, body) = call_health(ports, uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "httpStatus": 200,
            "serverIp": "172.16.0.10",
            "message": "Service is healthy",
            "timestamp": "2026-03-01T09:15:00Z"
        })
    );
}

#[rstest]
#[actix_web::test]
async fn response_status_mirrors_reported_status(checked_at: DateTime<Utc>) {
    let mut ports = MockPorts::default();
    let report = report(503, "10.0.0.5", checked_at);
    ports
        .check_health
        .expect_execute()
        .return_once(move || Ok(report));

    let (status, body) = call_health(ports, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["httpStatus"], json!(503));
}

#[rstest]
#[actix_web::test]
async fn contract_violations_surface_as_redacted_500s() {
    let mut ports = MockPorts::default();
    ports
        .check_health
        .expect_execute()
        .return_once(|| Err(HealthStatusValidationError::EmptyServerIp));

    let (status, body) = call_health(ports, "/health").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

async fn probe(state: Arc<HealthState>, uri: &str) -> (StatusCode, Option<String>) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::from(state))
            .service(ready)
            .service(live),
    )
    .await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    (response.status(), cache_control)
}

#[given("a freshly started service")]
fn a_freshly_started_service() -> Arc<HealthState> {
    Arc::new(HealthState::new())
}

#[when("the server finishes binding")]
fn the_server_finishes_binding(state: &HealthState) {
    state.mark_ready();
}

#[when("the service begins draining")]
fn the_service_begins_draining(state: &HealthState) {
    state.mark_unhealthy();
}

#[then("the probe answers with the expected status and no caching")]
fn the_probe_answers(observed: (StatusCode, Option<String>), expected: StatusCode) {
    assert_eq!(observed.0, expected);
    assert_eq!(observed.1.as_deref(), Some("no-store"));
}

#[rstest]
#[actix_web::test]
async fn readiness_flips_once_bound() {
    let state = a_freshly_started_service();
    the_probe_answers(
        probe(Arc::clone(&state), "/health/ready").await,
        StatusCode::SERVICE_UNAVAILABLE,
    );

    the_server_finishes_binding(&state);
    the_probe_answers(probe(state, "/health/ready").await, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn liveness_fails_once_draining() {
    let state = a_freshly_started_service();
    the_probe_answers(probe(Arc::clone(&state), "/health/live").await, StatusCode::OK);

    the_service_begins_draining(&state);
    the_probe_answers(
        probe(state, "/health/live").await,
        StatusCode::SERVICE_UNAVAILABLE,
    );
}
