//! Driven port for reading user records.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user repository adapters.
    pub enum UsersRepositoryError {
        /// Backing store could not be reached.
        Connection { message: String } => "users repository connection failed: {message}",
        /// Lookup failed while executing.
        Query { message: String } => "users repository query failed: {message}",
    }
}

/// Read-only access to the user collection.
///
/// Adapters return owned copies; callers cannot mutate stored records
/// through the values they receive. `find_all` yields records in a stable
/// order that repeats across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Every stored user, in storage order.
    async fn find_all(&self) -> Result<Vec<User>, UsersRepositoryError>;

    /// The user with a matching id, or `None`.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UsersRepositoryError>;
}
