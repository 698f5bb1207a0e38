//! Host inspection adapters.

mod os_system_info_gateway;

pub use os_system_info_gateway::{
    InterfaceAddress, InterfaceSource, OsSystemInfoGateway, SysinfoInterfaceSource,
    select_server_ip,
};
