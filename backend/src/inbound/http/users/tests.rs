//! Tests for users API handlers.

use super::*;
use crate::domain::ports::{UserNotFoundError, UsersRepositoryError};
use crate::domain::{ErrorCode, UserProjection};
use crate::inbound::http::test_utils::MockPorts;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn projection(id: &str, name: &str, email: &str, role: &str) -> UserProjection {
    UserProjection {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
    }
}

#[fixture]
fn jane() -> UserProjection {
    projection("user-1", "Jane Doe", "jane.doe@example.com", "member")
}

#[fixture]
fn john() -> UserProjection {
    projection("user-2", "John Smith", "john.smith@example.com", "admin")
}

async fn get(ports: MockPorts, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .service(web::scope("/api").service(list_users).service(get_user)),
    )
    .await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn list_returns_users_in_port_order(jane: UserProjection, john: UserProjection) {
    let mut ports = MockPorts::default();
    let users = vec![jane, john];
    ports
        .list_users
        .expect_execute()
        .times(1)
        .return_once(move || Ok(users));

    let (status, body) = get(ports, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "users": [
                {"id": "user-1", "name": "Jane Doe", "email": "jane.doe@example.com", "role": "member"},
                {"id": "user-2", "name": "John Smith", "email": "john.smith@example.com", "role": "admin"}
            ]
        })
    );
}

#[rstest]
#[actix_web::test]
async fn list_returns_an_empty_array() {
    let mut ports = MockPorts::default();
    ports
        .list_users
        .expect_execute()
        .return_once(|| Ok(Vec::new()));

    let (status, body) = get(ports, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": [] }));
}

#[rstest]
#[actix_web::test]
async fn list_failures_are_redacted_500s() {
    let mut ports = MockPorts::default();
    ports
        .list_users
        .expect_execute()
        .return_once(|| Err(UsersRepositoryError::connection("10.0.0.3:5432 refused")));

    let (status, body) = get(ports, "/api/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[rstest]
#[actix_web::test]
async fn get_returns_the_user_envelope(john: UserProjection) {
    let mut ports = MockPorts::default();
    ports
        .get_user_by_id
        .expect_execute()
        .withf(|id| id == "user-2")
        .times(1)
        .return_once(move |_| Ok(john));

    let (status, body) = get(ports, "/api/users/user-2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "user": {"id": "user-2", "name": "John Smith", "email": "john.smith@example.com", "role": "admin"}
        })
    );
}

#[rstest]
#[case("missing")]
#[case("999")]
#[case("abc")]
#[actix_web::test]
async fn get_maps_misses_to_404(#[case] id: &'static str) {
    let mut ports = MockPorts::default();
    ports.get_user_by_id.expect_execute().return_once(move |_| {
        Err(GetUserByIdError::NotFound(UserNotFoundError { id: id.to_owned() }))
    });

    let (status, body) = get(ports, &format!("/api/users/{id}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": format!("User {id} not found") }));
}

#[rstest]
#[actix_web::test]
async fn get_maps_repository_failures_to_500() {
    let mut ports = MockPorts::default();
    ports
        .get_user_by_id
        .expect_execute()
        .return_once(|_| Err(UsersRepositoryError::query("syntax error").into()));

    let (status, body) = get(ports, "/api/users/user-1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[rstest]
fn miss_mapping_preserves_the_message() {
    let err = map_get_user_error(GetUserByIdError::NotFound(UserNotFoundError {
        id: "42".to_owned(),
    }));
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "User 42 not found");
}
