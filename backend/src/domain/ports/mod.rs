//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`UsersRepository`, `SystemInfoGateway`) are implemented by
//! outbound adapters. Driving ports (`ListUsers`, `GetUserById`,
//! `CheckHealth`) are implemented by domain services and called by inbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod health_check;
mod system_info_gateway;
mod users_query;
mod users_repository;

pub use health_check::CheckHealth;
#[cfg(test)]
pub use health_check::MockCheckHealth;
#[cfg(test)]
pub use system_info_gateway::MockSystemInfoGateway;
pub use system_info_gateway::SystemInfoGateway;
pub use users_query::{GetUserById, GetUserByIdError, ListUsers, UserNotFoundError};
#[cfg(test)]
pub use users_query::{MockGetUserById, MockListUsers};
#[cfg(test)]
pub use users_repository::MockUsersRepository;
pub use users_repository::{UsersRepository, UsersRepositoryError};
