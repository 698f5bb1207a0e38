//! Read-only user repository over a shared fixture set.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UsersRepository, UsersRepositoryError};
use crate::domain::{User, UserId};

use super::UserFixtures;

/// [`UsersRepository`] serving clones of a fixed [`UserFixtures`] set.
///
/// Never fails. Listing preserves fixture order.
#[derive(Debug, Clone)]
pub struct InMemoryUsersRepository {
    fixtures: Arc<UserFixtures>,
}

impl InMemoryUsersRepository {
    /// Serve the given fixture set.
    pub fn new(fixtures: Arc<UserFixtures>) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_all(&self) -> Result<Vec<User>, UsersRepositoryError> {
        Ok(self.fixtures.users().to_vec())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UsersRepositoryError> {
        Ok(self
            .fixtures
            .users()
            .iter()
            .find(|user| user.id() == id)
            .cloned())
    }
}
