//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers that describe domain types without coupling them
//! to utoipa. The document is served by Swagger UI in debug builds and
//! printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::ErrorBody;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::{UserRoleSchema, UserSchema};
use crate::inbound::http::users::{UserResponse, UsersResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "Read-only user directory with a health endpoint."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserRoleSchema,
        UsersResponse,
        UserResponse,
        HealthResponse,
        ErrorBody
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
