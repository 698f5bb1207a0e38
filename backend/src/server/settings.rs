//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ROSTER_*` environment variables and an
//! optional configuration file, in the usual OrthoConfig precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Returned when the configured host is not an IP address.
#[derive(Debug, Error)]
#[error("host `{host}` is not a valid IP address: {source}")]
pub struct InvalidHostError {
    pub host: String,
    #[source]
    pub source: AddrParseError,
}

/// Configuration values controlling the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Address to bind; must be an IP literal.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// JSON file of user records served instead of the demo set.
    pub fixtures_path: Option<PathBuf>,
    /// Upper bound on network interface enumeration, in milliseconds.
    #[ortho_config(default = 2000)]
    pub interface_timeout_ms: u64,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Interface enumeration bound as a [`Duration`].
    pub fn interface_timeout(&self) -> Duration {
        Duration::from_millis(self.interface_timeout_ms)
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`InvalidHostError`] when the host is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidHostError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|source| InvalidHostError {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
