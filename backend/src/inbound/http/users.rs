//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{id}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::GetUserByIdError;
use crate::domain::{Error, UserProjection};
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, ErrorBody};

/// Response body for `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<UserProjection>,
}

/// Response body for `GET /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = UserSchema)]
    pub user: UserProjection,
}

/// List every user in stable order.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use roster::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.list_users.execute().await?;
    Ok(web::Json(UsersResponse { users }))
}

/// Fetch one user by its opaque identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Opaque user identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "No user has this identifier", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = path.into_inner();
    debug!(user_id = %id, "fetching user");
    let user = state
        .get_user_by_id
        .execute(&id)
        .await
        .map_err(map_get_user_error)?;
    Ok(web::Json(UserResponse { user }))
}

fn map_get_user_error(err: GetUserByIdError) -> Error {
    match err {
        GetUserByIdError::NotFound(missing) => Error::not_found(missing.to_string()),
        GetUserByIdError::Repository(source) => source.into(),
    }
}

#[cfg(test)]
mod tests;
