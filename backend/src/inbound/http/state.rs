//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CheckHealth, GetUserById, ListUsers};

/// Parameter object bundling the driving ports handlers call.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub list_users: Arc<dyn ListUsers>,
    pub get_user_by_id: Arc<dyn GetUserById>,
    pub check_health: Arc<dyn CheckHealth>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub list_users: Arc<dyn ListUsers>,
    pub get_user_by_id: Arc<dyn GetUserById>,
    pub check_health: Arc<dyn CheckHealth>,
}

impl HttpState {
    /// Construct state from the port bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            list_users,
            get_user_by_id,
            check_health,
        } = ports;
        Self {
            list_users,
            get_user_by_id,
            check_health,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
