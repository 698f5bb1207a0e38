//! Driving port for the service health check.

use async_trait::async_trait;

use crate::domain::{HealthReport, HealthStatusValidationError};

/// Produce a timestamped health report.
///
/// A validation error here means the implementation built a status that
/// breaks the [`crate::domain::HealthStatus`] contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckHealth: Send + Sync {
    async fn execute(&self) -> Result<HealthReport, HealthStatusValidationError>;
}
