//! Behaviour tests for the health endpoints against the real operating
//! system gateway and clock.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use chrono::{DateTime, Utc};
use roster::inbound::http::health::HealthState;
use roster::middleware::TRACE_ID_HEADER;
use roster::server::{AppDependencies, ServerConfig, build_app, build_http_state};
use rstest::rstest;
use rstest_bdd_macros::{given, then};
use serde_json::Value;

#[given("a running roster service")]
fn a_running_service() -> ServerConfig {
    ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
        .with_interface_timeout(Duration::from_secs(5))
}

async fn the_client_checks(config: &ServerConfig, uri: &str) -> (StatusCode, bool, Value) {
    let http_state = build_http_state(config).expect("state builds");
    let app = test::init_service(build_app(AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(http_state),
    }))
    .await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    let traced = res.headers().contains_key(TRACE_ID_HEADER);
    let body = test::read_body_json(res).await;
    (status, traced, body)
}

#[then("the service reports itself healthy with its address")]
fn the_service_reports_healthy(body: &Value) {
    assert_eq!(body["httpStatus"], 200);
    assert_eq!(body["message"], "Service is healthy");
    let server_ip = body["serverIp"].as_str().expect("serverIp string");
    let parsed: IpAddr = server_ip.parse().expect("serverIp is an address");
    assert!(parsed.is_ipv4(), "expected IPv4, got {parsed}");
    assert!(!parsed.is_unspecified());
}

#[rstest]
#[case("/health")]
#[case("/healthz")]
#[actix_web::test]
async fn health_endpoints_report_a_timestamped_status(#[case] uri: &str) {
    let config = a_running_service();
    let before = Utc::now();

    let (status, traced, body) = the_client_checks(&config, uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(traced, "trace-id header missing");
    the_service_reports_healthy(&body);
    let timestamp: DateTime<Utc> = body["timestamp"]
        .as_str()
        .expect("timestamp string")
        .parse()
        .expect("RFC 3339 timestamp");
    assert!(timestamp >= before - chrono::Duration::seconds(1));
    assert!(timestamp <= Utc::now() + chrono::Duration::seconds(1));
}

#[rstest]
#[actix_web::test]
async fn repeated_checks_report_the_same_address() {
    let config = a_running_service();

    let (_, _, first) = the_client_checks(&config, "/health").await;
    let (_, _, second) = the_client_checks(&config, "/healthz").await;

    assert_eq!(first["serverIp"], second["serverIp"]);
}

#[rstest]
#[case("/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
#[case("/health/live", StatusCode::OK)]
#[actix_web::test]
async fn probes_reflect_a_service_that_has_not_bound(
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let config = a_running_service();
    let http_state = build_http_state(&config).expect("state builds");
    let app = test::init_service(build_app(AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(http_state),
    }))
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), expected);
}
