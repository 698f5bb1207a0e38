//! Driving ports for user queries.
//!
//! Inbound adapters depend on these traits rather than on the repository so
//! lookup rules stay inside the domain.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::UserProjection;

use super::UsersRepositoryError;

/// Returned when no user carries the requested id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("User {id} not found")]
pub struct UserNotFoundError {
    pub id: String,
}

/// Failure modes of [`GetUserById`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetUserByIdError {
    #[error(transparent)]
    NotFound(#[from] UserNotFoundError),
    #[error(transparent)]
    Repository(#[from] UsersRepositoryError),
}

/// List every user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListUsers: Send + Sync {
    /// Project every stored user, preserving repository order.
    async fn execute(&self) -> Result<Vec<UserProjection>, UsersRepositoryError>;
}

/// Fetch a single user by its raw identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetUserById: Send + Sync {
    /// Resolve `id` to a user projection.
    ///
    /// Identifiers that cannot name a user, including empty ones, are
    /// reported as [`GetUserByIdError::NotFound`].
    async fn execute(&self, id: &str) -> Result<UserProjection, GetUserByIdError>;
}
