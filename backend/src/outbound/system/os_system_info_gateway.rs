//! [`SystemInfoGateway`] backed by the host's network interfaces.
//!
//! Enumeration is a blocking OS call, so it runs on the blocking pool under a
//! timeout. Any failure to enumerate degrades to loopback rather than
//! surfacing an error.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sysinfo::Networks;
use tracing::{debug, warn};

use crate::domain::ports::SystemInfoGateway;

/// One address bound to a network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// Interface name, e.g. `eth0`.
    pub name: String,
    pub address: IpAddr,
    /// True for loopback and other host-internal addresses.
    pub internal: bool,
}

/// Blocking source of interface addresses.
pub trait InterfaceSource: Send + Sync {
    /// Addresses in selection order.
    fn interfaces(&self) -> Vec<InterfaceAddress>;
}

/// Reads interfaces through `sysinfo`, sorted by interface name.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoInterfaceSource;

impl InterfaceSource for SysinfoInterfaceSource {
    fn interfaces(&self) -> Vec<InterfaceAddress> {
        let networks = Networks::new_with_refreshed_list();
        let mut named: Vec<_> = networks.list().iter().collect();
        named.sort_by(|(left, _), (right, _)| left.cmp(right));

        named
            .into_iter()
            .flat_map(|(name, data)| {
                data.ip_networks().iter().map(move |network| InterfaceAddress {
                    name: name.clone(),
                    address: network.addr,
                    internal: network.addr.is_loopback(),
                })
            })
            .collect()
    }
}

/// Pick the first external IPv4 address, falling back to loopback.
///
/// # Examples
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use roster::outbound::system::{InterfaceAddress, select_server_ip};
///
/// let interfaces = [
///     InterfaceAddress {
///         name: "lo".into(),
///         address: IpAddr::V4(Ipv4Addr::LOCALHOST),
///         internal: true,
///     },
///     InterfaceAddress {
///         name: "eth0".into(),
///         address: IpAddr::V4(Ipv4Addr::new(172, 16, 0, 10)),
///         internal: false,
///     },
/// ];
/// assert_eq!(select_server_ip(&interfaces), Ipv4Addr::new(172, 16, 0, 10));
/// assert_eq!(select_server_ip(&[]), Ipv4Addr::LOCALHOST);
/// ```
pub fn select_server_ip(interfaces: &[InterfaceAddress]) -> Ipv4Addr {
    interfaces
        .iter()
        .filter(|interface| !interface.internal)
        .find_map(|interface| match interface.address {
            IpAddr::V4(address) if !address.is_unspecified() => Some(address),
            _ => None,
        })
        .unwrap_or(Ipv4Addr::LOCALHOST)
}

/// Gateway reporting the host's first external IPv4 address.
#[derive(Clone)]
pub struct OsSystemInfoGateway {
    source: Arc<dyn InterfaceSource>,
    timeout: Duration,
}

impl OsSystemInfoGateway {
    /// Wrap `source`, giving up on enumeration after `timeout`.
    pub fn new(source: Arc<dyn InterfaceSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }
}

#[async_trait]
impl SystemInfoGateway for OsSystemInfoGateway {
    async fn server_ip(&self) -> Ipv4Addr {
        let source = Arc::clone(&self.source);
        let lookup = tokio::task::spawn_blocking(move || source.interfaces());

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(interfaces)) => {
                let selected = select_server_ip(&interfaces);
                debug!(
                    interface_count = interfaces.len(),
                    server_ip = %selected,
                    "selected server address"
                );
                selected
            }
            Ok(Err(error)) => {
                warn!(%error, "interface enumeration failed; reporting loopback");
                Ipv4Addr::LOCALHOST
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis(),
                    "interface enumeration timed out; reporting loopback"
                );
                Ipv4Addr::LOCALHOST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::*;
    use rstest::rstest;

    fn v4(name: &str, octets: [u8; 4], internal: bool) -> InterfaceAddress {
        InterfaceAddress {
            name: name.to_owned(),
            address: IpAddr::V4(Ipv4Addr::from(octets)),
            internal,
        }
    }

    fn v6(name: &str, address: Ipv6Addr, internal: bool) -> InterfaceAddress {
        InterfaceAddress {
            name: name.to_owned(),
            address: IpAddr::V6(address),
            internal,
        }
    }

    struct StaticSource(Vec<InterfaceAddress>);

    impl InterfaceSource for StaticSource {
        fn interfaces(&self) -> Vec<InterfaceAddress> {
            self.0.clone()
        }
    }

    struct SlowSource(Duration);

    impl InterfaceSource for SlowSource {
        fn interfaces(&self) -> Vec<InterfaceAddress> {
            std::thread::sleep(self.0);
            vec![v4("eth0", [10, 0, 0, 9], false)]
        }
    }

    struct PanickingSource;

    impl InterfaceSource for PanickingSource {
        fn interfaces(&self) -> Vec<InterfaceAddress> {
            panic!("interface table unavailable");
        }
    }

    #[rstest]
    #[case::loopback_then_external(
        vec![v4("lo", [127, 0, 0, 1], true), v4("eth0", [172, 16, 0, 10], false)],
        Ipv4Addr::new(172, 16, 0, 10)
    )]
    #[case::first_external_wins(
        vec![v4("eth0", [10, 0, 0, 1], false), v4("eth1", [10, 0, 0, 2], false)],
        Ipv4Addr::new(10, 0, 0, 1)
    )]
    #[case::ipv6_is_skipped(
        vec![v6("eth0", Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1), false), v4("eth1", [192, 168, 1, 4], false)],
        Ipv4Addr::new(192, 168, 1, 4)
    )]
    #[case::unspecified_is_skipped(
        vec![v4("eth0", [0, 0, 0, 0], false)],
        Ipv4Addr::LOCALHOST
    )]
    #[case::only_internal(vec![v4("lo", [127, 0, 0, 1], true)], Ipv4Addr::LOCALHOST)]
    #[case::no_interfaces(Vec::new(), Ipv4Addr::LOCALHOST)]
    fn selects_first_external_ipv4(
        #[case] interfaces: Vec<InterfaceAddress>,
        #[case] expected: Ipv4Addr,
    ) {
        assert_eq!(select_server_ip(&interfaces), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn gateway_reports_selected_address() {
        let source = StaticSource(vec![
            v4("lo", [127, 0, 0, 1], true),
            v4("eth0", [172, 16, 0, 10], false),
        ]);
        let gateway = OsSystemInfoGateway::new(Arc::new(source), Duration::from_secs(1));

        assert_eq!(gateway.server_ip().await, Ipv4Addr::new(172, 16, 0, 10));
    }

    #[rstest]
    #[tokio::test]
    async fn gateway_falls_back_to_loopback_on_timeout() {
        let source = SlowSource(Duration::from_millis(300));
        let gateway = OsSystemInfoGateway::new(Arc::new(source), Duration::from_millis(10));

        assert_eq!(gateway.server_ip().await, Ipv4Addr::LOCALHOST);
    }

    #[rstest]
    #[tokio::test]
    async fn gateway_falls_back_to_loopback_when_enumeration_panics() {
        let gateway = OsSystemInfoGateway::new(Arc::new(PanickingSource), Duration::from_secs(1));

        assert_eq!(gateway.server_ip().await, Ipv4Addr::LOCALHOST);
    }

    #[rstest]
    #[tokio::test]
    async fn sysinfo_source_yields_a_usable_address() {
        let gateway =
            OsSystemInfoGateway::new(Arc::new(SysinfoInterfaceSource), Duration::from_secs(5));

        let ip = gateway.server_ip().await;
        assert!(!ip.is_unspecified());
    }
}
