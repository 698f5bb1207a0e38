//! Fixed user sets backing the in-memory repository.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::{User, UserProjection, UserValidationError};

/// Errors returned while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureLoadError {
    /// Fixture file could not be read.
    #[error("failed to read user fixtures at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Fixture file is not a JSON array of user records.
    #[error("user fixtures are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record failed user validation.
    #[error("user fixture at index {index} is invalid: {source}")]
    Validation {
        index: usize,
        #[source]
        source: UserValidationError,
    },
    /// Two records share an identifier.
    #[error("user fixture id `{id}` appears more than once")]
    DuplicateId { id: String },
}

/// Ordered, validated user records.
///
/// Order is preserved exactly as supplied; repositories built on top of a
/// fixture set list users in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFixtures {
    users: Vec<User>,
}

impl UserFixtures {
    /// Build a fixture set from already validated users.
    pub fn new(users: Vec<User>) -> Result<Self, FixtureLoadError> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id()) {
                return Err(FixtureLoadError::DuplicateId {
                    id: user.id().to_string(),
                });
            }
        }
        Ok(Self { users })
    }

    /// The records served when no fixture file is configured.
    ///
    /// # Examples
    /// ```
    /// use roster::outbound::users::UserFixtures;
    ///
    /// let fixtures = UserFixtures::demo();
    /// assert_eq!(fixtures.users().len(), 2);
    /// assert_eq!(fixtures.users()[0].name(), "Jane Doe");
    /// ```
    pub fn demo() -> Self {
        let users = [
            demo_user("user-1", "Jane Doe", "jane.doe@example.com", "member"),
            demo_user("user-2", "John Smith", "john.smith@example.com", "admin"),
        ];
        Self {
            users: users.into_iter().collect(),
        }
    }

    /// Parse a JSON array of `{id, name, email, role}` records.
    pub fn from_json(contents: &str) -> Result<Self, FixtureLoadError> {
        let projections: Vec<UserProjection> = serde_json::from_str(contents)?;
        let users = projections
            .into_iter()
            .enumerate()
            .map(|(index, projection)| {
                User::try_from(projection)
                    .map_err(|source| FixtureLoadError::Validation { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(users)
    }

    /// Read and parse a fixture file.
    pub fn load_from_path(path: &Path) -> Result<Self, FixtureLoadError> {
        let io_error = |source: std::io::Error| FixtureLoadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| {
            io_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "fixture path must be a file",
            ))
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(Path::new(file_name)).map_err(io_error)?;

        let fixtures = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            user_count = fixtures.users.len(),
            "loaded user fixtures"
        );
        Ok(fixtures)
    }

    /// Users in load order.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Default for UserFixtures {
    fn default() -> Self {
        Self::demo()
    }
}

fn demo_user(id: &str, name: &str, email: &str, role: &str) -> User {
    // Compile-time constants covered by `demo_fixtures_are_valid`.
    User::try_new(id, name, email, role)
        .unwrap_or_else(|error| panic!("demo user `{id}` is invalid: {error}"))
}
