//! Health check service implementing the [`CheckHealth`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{CheckHealth, SystemInfoGateway};
use crate::domain::{HealthReport, HealthStatus, HealthStatusValidationError};

/// Status code reported by a passing check.
pub const HEALTHY_STATUS: u16 = 200;
/// Message reported by a passing check.
pub const HEALTHY_MESSAGE: &str = "Service is healthy";

/// Reports the service as healthy, tagged with the host address and the
/// time of the check.
#[derive(Clone)]
pub struct CheckHealthUseCase {
    system_info: Arc<dyn SystemInfoGateway>,
    clock: Arc<dyn Clock>,
}

impl CheckHealthUseCase {
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use std::time::Duration;
    /// # use mockable::DefaultClock;
    /// # use roster::domain::CheckHealthUseCase;
    /// # use roster::outbound::system::{OsSystemInfoGateway, SysinfoInterfaceSource};
    /// let gateway = OsSystemInfoGateway::new(
    ///     Arc::new(SysinfoInterfaceSource),
    ///     Duration::from_secs(2),
    /// );
    /// let _service = CheckHealthUseCase::new(Arc::new(gateway), Arc::new(DefaultClock));
    /// ```
    pub fn new(system_info: Arc<dyn SystemInfoGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { system_info, clock }
    }
}

#[async_trait]
impl CheckHealth for CheckHealthUseCase {
    async fn execute(&self) -> Result<HealthReport, HealthStatusValidationError> {
        let server_ip = self.system_info.server_ip().await;
        let status = HealthStatus::try_new(HEALTHY_STATUS, server_ip.to_string(), HEALTHY_MESSAGE)?;
        debug!(%server_ip, "health check passed");
        Ok(HealthReport::new(status, self.clock.utc()))
    }
}
