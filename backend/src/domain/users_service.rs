//! User query services implementing the [`ListUsers`] and [`GetUserById`]
//! driving ports on top of a [`UsersRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    GetUserById, GetUserByIdError, ListUsers, UserNotFoundError, UsersRepository,
    UsersRepositoryError,
};
use crate::domain::{UserId, UserProjection};

/// Lists every user known to the repository.
#[derive(Clone)]
pub struct ListUsersUseCase {
    users: Arc<dyn UsersRepository>,
}

impl ListUsersUseCase {
    /// Build the use case over a repository.
    pub fn new(users: Arc<dyn UsersRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl ListUsers for ListUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserProjection>, UsersRepositoryError> {
        let users = self.users.find_all().await?;
        debug!(count = users.len(), "listed users");
        Ok(users.into_iter().map(UserProjection::from).collect())
    }
}

/// Resolves one user by identifier.
///
/// # Examples
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use roster::domain::GetUserByIdUseCase;
/// # use roster::domain::ports::{GetUserById, GetUserByIdError};
/// # use roster::outbound::users::{InMemoryUsersRepository, UserFixtures};
/// # async fn example() -> Result<(), GetUserByIdError> {
/// let repository = InMemoryUsersRepository::new(Arc::new(UserFixtures::demo()));
/// let use_case = GetUserByIdUseCase::new(Arc::new(repository));
/// let user = use_case.execute("user-1").await?;
/// assert_eq!(user.name, "Jane Doe");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GetUserByIdUseCase {
    users: Arc<dyn UsersRepository>,
}

impl GetUserByIdUseCase {
    /// Build the use case over a repository.
    pub fn new(users: Arc<dyn UsersRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl GetUserById for GetUserByIdUseCase {
    async fn execute(&self, id: &str) -> Result<UserProjection, GetUserByIdError> {
        let not_found = || UserNotFoundError { id: id.to_owned() };

        // An id that fails validation cannot match a stored user.
        let Ok(user_id) = UserId::new(id) else {
            debug!(user_id = id, "rejected unusable user id");
            return Err(not_found().into());
        };

        match self.users.find_by_id(&user_id).await? {
            Some(user) => {
                debug!(user_id = %user_id, "user found");
                Ok(user.into())
            }
            None => {
                debug!(user_id = %user_id, "user not found");
                Err(not_found().into())
            }
        }
    }
}
