//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{MockCheckHealth, MockGetUserById, MockListUsers};

use super::state::{HttpState, HttpStatePorts};

/// Mocks for every port [`HttpState`] carries, with no expectations set.
///
/// Tests configure the ports they exercise and convert with
/// [`MockPorts::into_state`]; calls to unconfigured ports panic.
#[derive(Default)]
pub struct MockPorts {
    pub list_users: MockListUsers,
    pub get_user_by_id: MockGetUserById,
    pub check_health: MockCheckHealth,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            list_users: Arc::new(self.list_users),
            get_user_by_id: Arc::new(self.get_user_by_id),
            check_health: Arc::new(self.check_health),
        })
    }
}
