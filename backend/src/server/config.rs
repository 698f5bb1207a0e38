//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

use crate::inbound::http::HttpStatePorts;

use super::settings::{InvalidHostError, ServerSettings};

/// Default upper bound on network interface enumeration.
pub const DEFAULT_INTERFACE_TIMEOUT: Duration = Duration::from_secs(2);

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) fixtures_path: Option<PathBuf>,
    pub(crate) interface_timeout: Duration,
    pub(crate) ports: Option<HttpStatePorts>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a configuration serving the demo users on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            fixtures_path: None,
            interface_timeout: DEFAULT_INTERFACE_TIMEOUT,
            ports: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Build a configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`InvalidHostError`] when the configured host is not an IP.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, InvalidHostError> {
        let config = Self::new(settings.bind_addr()?)
            .with_interface_timeout(settings.interface_timeout());
        Ok(match &settings.fixtures_path {
            Some(path) => config.with_fixtures_path(path.clone()),
            None => config,
        })
    }

    /// Serve users from a JSON fixture file instead of the demo set.
    #[must_use]
    pub fn with_fixtures_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixtures_path = Some(path.into());
        self
    }

    /// Bound the network interface lookup made by health checks.
    #[must_use]
    pub fn with_interface_timeout(mut self, timeout: Duration) -> Self {
        self.interface_timeout = timeout;
        self
    }

    /// Replace the default adapters with pre-built ports.
    ///
    /// Fixture and gateway settings are ignored when ports are supplied.
    #[must_use]
    pub fn with_ports(mut self, ports: HttpStatePorts) -> Self {
        self.ports = Some(ports);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Fixture file to load users from, if one was configured.
    #[must_use]
    pub fn fixtures_path(&self) -> Option<&PathBuf> {
        self.fixtures_path.as_ref()
    }

    /// Upper bound on the network interface lookup.
    #[must_use]
    pub fn interface_timeout(&self) -> Duration {
        self.interface_timeout
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }

    #[cfg(feature = "metrics")]
    /// Return the configured Prometheus middleware, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<&PrometheusMetrics> {
        self.prometheus.as_ref()
    }
}
