//! Health endpoints.
//!
//! `GET /health` (and its `/healthz` alias) reports the service status with
//! the host address. `/health/ready` and `/health/live` are bare probes for
//! orchestrators and load balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::StatusCode, http::header, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, HealthReport, HealthStatusProjection};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, ErrorBody};

/// Response body for `GET /health`.
///
/// The health status fields followed by the time of the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[schema(example = 200)]
    pub http_status: u16,
    #[schema(example = "172.16.0.10")]
    pub server_ip: String,
    #[schema(example = "Service is healthy")]
    pub message: String,
    /// RFC 3339 UTC timestamp of the check.
    pub timestamp: DateTime<Utc>,
}

impl From<&HealthReport> for HealthResponse {
    fn from(report: &HealthReport) -> Self {
        let HealthStatusProjection {
            http_status,
            server_ip,
            message,
        } = report.status().to_projection();
        Self {
            http_status,
            server_ip,
            message,
            timestamp: report.checked_at(),
        }
    }
}

/// Report service health.
///
/// The response status mirrors the `httpStatus` field of the body.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["health"],
    operation_id = "getHealth"
)]
pub async fn health(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let report = state.check_health.execute().await?;
    let response = HealthResponse::from(&report);
    let status = StatusCode::from_u16(response.http_status).map_err(|err| {
        Error::internal(format!(
            "health status {} is not a usable HTTP status: {err}",
            response.http_status
        ))
    })?;
    Ok(HttpResponse::build(status).json(response))
}

/// Shared health state for readiness and liveness checks.
///
/// Starts not ready but live.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Start alive but not yet ready to serve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the listener is bound and serving.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe. 200 once the server is bound, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. 200 while the process is marked alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests;
