//! Composition of domain services and outbound adapters into [`HttpState`].

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::UsersRepository;
use crate::domain::{CheckHealthUseCase, GetUserByIdUseCase, ListUsersUseCase};
use crate::inbound::http::{HttpState, HttpStatePorts};
use crate::outbound::system::{OsSystemInfoGateway, SysinfoInterfaceSource};
use crate::outbound::users::{FixtureLoadError, InMemoryUsersRepository, UserFixtures};

use super::ServerConfig;

/// Failures raised while assembling or starting the server.
#[derive(Debug, Error)]
pub enum CompositionError {
    /// User fixtures could not be loaded.
    #[error(transparent)]
    Fixtures(#[from] FixtureLoadError),
    /// The listener could not be bound or started.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

fn load_fixtures(config: &ServerConfig) -> Result<UserFixtures, FixtureLoadError> {
    match config.fixtures_path() {
        Some(path) => UserFixtures::load_from_path(path),
        None => {
            info!("no fixture file configured; serving demo users");
            Ok(UserFixtures::demo())
        }
    }
}

fn default_ports(config: &ServerConfig) -> Result<HttpStatePorts, FixtureLoadError> {
    let fixtures = Arc::new(load_fixtures(config)?);
    let users: Arc<dyn UsersRepository> = Arc::new(InMemoryUsersRepository::new(fixtures));
    let system_info = Arc::new(OsSystemInfoGateway::new(
        Arc::new(SysinfoInterfaceSource),
        config.interface_timeout(),
    ));

    Ok(HttpStatePorts {
        list_users: Arc::new(ListUsersUseCase::new(Arc::clone(&users))),
        get_user_by_id: Arc::new(GetUserByIdUseCase::new(users)),
        check_health: Arc::new(CheckHealthUseCase::new(
            system_info,
            Arc::new(DefaultClock),
        )),
    })
}

/// Build the handler state from the configuration.
///
/// Pre-built ports attached with [`ServerConfig::with_ports`] take
/// precedence; otherwise the in-memory repository and OS gateway are wired.
///
/// # Errors
/// Returns [`CompositionError::Fixtures`] when a configured fixture file
/// cannot be loaded.
pub fn build_http_state(config: &ServerConfig) -> Result<HttpState, CompositionError> {
    let ports = match &config.ports {
        Some(ports) => ports.clone(),
        None => default_ports(config)?,
    };
    Ok(HttpState::new(ports))
}
