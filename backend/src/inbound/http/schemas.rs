//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape so handlers can reference
//! them in path annotations.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::UserRole`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserRole, rename_all = "lowercase")]
pub enum UserRoleSchema {
    /// Full administrative access.
    Admin,
    /// Regular member.
    Member,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Opaque user identifier.
    #[schema(example = "user-1")]
    id: String,
    #[schema(example = "Jane Doe")]
    name: String,
    #[schema(example = "jane.doe@example.com")]
    email: String,
    role: UserRoleSchema,
}
