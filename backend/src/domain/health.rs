//! Health status entity and the timestamped report produced by a health check.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Status codes a [`HealthStatus`] may carry.
pub const HTTP_STATUS_RANGE: RangeInclusive<u16> = 100..=599;

/// Validation errors returned by [`HealthStatus::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthStatusValidationError {
    #[error("httpStatus must be a valid HTTP status code, got {status}")]
    StatusOutOfRange { status: u16 },
    #[error("serverIp is required")]
    EmptyServerIp,
    #[error("message is required")]
    EmptyMessage,
}

impl HealthStatusValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::StatusOutOfRange { .. } => "httpStatus",
            Self::EmptyServerIp => "serverIp",
            Self::EmptyMessage => "message",
        }
    }
}

/// Serialisable snapshot of a [`HealthStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatusProjection {
    pub http_status: u16,
    pub server_ip: String,
    pub message: String,
}

/// Outcome of a health check.
///
/// ## Invariants
/// - `http_status` lies within [`HTTP_STATUS_RANGE`].
/// - `server_ip` and `message` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    http_status: u16,
    server_ip: String,
    message: String,
}

impl HealthStatus {
    /// Fallible constructor checking, in order: status range, server IP,
    /// message.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{HealthStatus, HealthStatusValidationError};
    ///
    /// let status = HealthStatus::try_new(200, "10.0.0.5", "Service is healthy")
    ///     .expect("valid status");
    /// assert_eq!(status.http_status(), 200);
    ///
    /// let err = HealthStatus::try_new(600, "10.0.0.5", "nope").unwrap_err();
    /// assert_eq!(err, HealthStatusValidationError::StatusOutOfRange { status: 600 });
    /// ```
    pub fn try_new(
        http_status: u16,
        server_ip: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, HealthStatusValidationError> {
        if !HTTP_STATUS_RANGE.contains(&http_status) {
            return Err(HealthStatusValidationError::StatusOutOfRange {
                status: http_status,
            });
        }
        let server_ip = server_ip.into();
        if server_ip.is_empty() {
            return Err(HealthStatusValidationError::EmptyServerIp);
        }
        let message = message.into();
        if message.is_empty() {
            return Err(HealthStatusValidationError::EmptyMessage);
        }

        Ok(Self {
            http_status,
            server_ip,
            message,
        })
    }

    /// Status code the check reports.
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Address the server answers on.
    pub fn server_ip(&self) -> &str {
        self.server_ip.as_str()
    }

    /// Human-readable summary.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Copy the fields into their wire shape.
    pub fn to_projection(&self) -> HealthStatusProjection {
        HealthStatusProjection {
            http_status: self.http_status,
            server_ip: self.server_ip.clone(),
            message: self.message.clone(),
        }
    }
}

/// A [`HealthStatus`] stamped with the instant it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    status: HealthStatus,
    checked_at: DateTime<Utc>,
}

impl HealthReport {
    /// Stamp `status` with `checked_at`.
    pub fn new(status: HealthStatus, checked_at: DateTime<Utc>) -> Self {
        Self { status, checked_at }
    }

    /// Status the check produced.
    pub fn status(&self) -> &HealthStatus {
        &self.status
    }

    /// Instant the check completed, from the injected clock.
    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }
}
