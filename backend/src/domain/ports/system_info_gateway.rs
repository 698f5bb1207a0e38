//! Driven port exposing host facts the service reports about itself.

use std::net::Ipv4Addr;

use async_trait::async_trait;

/// Source of the address the service advertises in health reports.
///
/// Implementations never fail. When no usable external address exists they
/// answer with [`Ipv4Addr::LOCALHOST`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SystemInfoGateway: Send + Sync {
    /// The first non-internal IPv4 address of the host, or loopback.
    async fn server_ip(&self) -> Ipv4Addr;
}
