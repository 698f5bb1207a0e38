//! User entity.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned by [`User::try_new`].
///
/// Variants are ordered the way construction checks them; the first
/// violated rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("id is required")]
    EmptyId,
    #[error("name is required")]
    EmptyName,
    #[error("email is required")]
    EmptyEmail,
    #[error("email must be valid")]
    InvalidEmail,
    #[error("role must be a supported value, got `{role}`")]
    UnsupportedRole { role: String },
}

impl UserValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId => "id",
            Self::EmptyName => "name",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::UnsupportedRole { .. } => "role",
        }
    }
}

/// Opaque, non-empty user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use roster::domain::UserId;
    ///
    /// assert!(UserId::new("user-1").is_ok());
    /// assert!(UserId::new("").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Email address matching a basic `local@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Member,
}

impl UserRole {
    /// Wire representation of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(UserValidationError::UnsupportedRole {
                role: other.to_owned(),
            }),
        }
    }
}

/// Plain serialisable snapshot of a [`User`].
///
/// Carries no validation behaviour of its own; converting it back into a
/// [`User`] runs the full set of checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserProjection {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Application user.
///
/// ## Invariants
/// - `id` and `name` are non-empty.
/// - `email` matches `local@domain.tld`.
/// - `role` is one of `admin` or `member`.
///
/// There are no mutators; an invalid `User` cannot be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserProjection", into = "UserProjection")]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
    role: UserRole,
}

impl User {
    /// Fallible constructor checking, in order: id, name, email presence,
    /// email format, role membership.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{User, UserValidationError};
    ///
    /// let user = User::try_new("user-1", "Jane Doe", "jane.doe@example.com", "member")
    ///     .expect("valid user");
    /// assert_eq!(user.id().to_string(), "user-1");
    ///
    /// let err = User::try_new("user-1", "Jane Doe", "jane.doe", "member").unwrap_err();
    /// assert_eq!(err, UserValidationError::InvalidEmail);
    /// ```
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl AsRef<str>,
    ) -> Result<Self, UserValidationError> {
        let id = UserId::new(id)?;
        let name = name.into();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let email = EmailAddress::new(email)?;
        let role = role.as_ref().parse::<UserRole>()?;

        Ok(Self {
            id,
            name,
            email,
            role,
        })
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Granted role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Detach the entity into its serialisable snapshot.
    pub fn to_projection(&self) -> UserProjection {
        UserProjection {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.as_ref().to_owned(),
            role: self.role.as_str().to_owned(),
        }
    }
}

impl From<User> for UserProjection {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
        } = value;
        Self {
            id: id.0,
            name,
            email: email.0,
            role: role.as_str().to_owned(),
        }
    }
}

impl TryFrom<UserProjection> for User {
    type Error = UserValidationError;

    fn try_from(value: UserProjection) -> Result<Self, Self::Error> {
        let UserProjection {
            id,
            name,
            email,
            role,
        } = value;
        Self::try_new(id, name, email, role)
    }
}
