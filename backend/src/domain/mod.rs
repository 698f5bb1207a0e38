//! Domain entities, ports and use-case services.
//!
//! Purpose: define the strongly typed entities the service exposes and the
//! use cases that operate on them. Nothing here knows about HTTP, the
//! operating system or the file system; those concerns live behind ports.
//!
//! Public surface:
//! - User (alias to `user::User`): validated user record.
//! - HealthStatus / HealthReport: outcome of a health check.
//! - Error / ErrorCode: transport-agnostic failure reported to adapters.
//! - TraceId: request-scoped correlation identifier.
//! - ListUsersUseCase / GetUserByIdUseCase / CheckHealthUseCase: driving
//!   port implementations.

pub mod error;
pub mod health;
mod health_service;
pub mod ports;
pub mod trace_id;
pub mod user;
mod users_service;

pub use self::error::{Error, ErrorCode};
pub use self::health::{
    HTTP_STATUS_RANGE, HealthReport, HealthStatus, HealthStatusProjection,
    HealthStatusValidationError,
};
pub use self::health_service::{CheckHealthUseCase, HEALTHY_MESSAGE, HEALTHY_STATUS};
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, User, UserId, UserProjection, UserRole, UserValidationError};
pub use self::users_service::{GetUserByIdUseCase, ListUsersUseCase};

/// Convenient result alias for adapter entry points.
///
/// # Examples
/// ```
/// use roster::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("User missing not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
