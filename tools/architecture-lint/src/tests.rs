//! Unit tests for the architecture lint.

use rstest::rstest;

use super::*;

fn lint_single(file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
    lint_sources(&[LintSource::new(file, contents)])
}

#[rstest]
#[case(
    "inbound/http/users.rs",
    "use crate::domain::ports::ListUsers; fn handler() { let _ = 1; }",
    true
)]
#[case(
    "inbound/http/error.rs",
    "use crate::middleware::trace::TRACE_ID_HEADER; fn header() -> &'static str { TRACE_ID_HEADER }",
    true
)]
#[case(
    "inbound/http/users.rs",
    "use crate::outbound::users::InMemoryUsersRepository; fn handler() { let _ = InMemoryUsersRepository::new; }",
    false
)]
#[case(
    "inbound/http/users.rs",
    "use roster::outbound::users::UserFixtures; fn handler() { let _ = UserFixtures::demo(); }",
    false
)]
#[case(
    "inbound/http/health.rs",
    "fn ip() { let _ = sysinfo::Networks::new_with_refreshed_list(); }",
    false
)]
#[case(
    "inbound/http/users.rs",
    "use crate::server::build_app; fn handler() {}",
    false
)]
#[case(
    "domain/user.rs",
    "use super::ports::UsersRepository; fn thing() { let _ = 1; }",
    true
)]
#[case(
    "domain/health_service.rs",
    "use mockable::Clock; use tokio::task_local; fn thing() {}",
    true
)]
#[case(
    "domain/error.rs",
    "use crate::middleware::TRACE_ID_HEADER; fn thing() {}",
    false
)]
#[case(
    "domain/health_service.rs",
    "use crate::outbound::system::OsSystemInfoGateway; fn thing() {}",
    false
)]
#[case(
    "domain/user.rs",
    "use utoipa::ToSchema; #[derive(ToSchema)] struct Foo;",
    false
)]
#[case(
    "outbound/users/fixtures.rs",
    "use cap_std::fs::Dir; use crate::domain::User; fn load() {}",
    true
)]
#[case(
    "outbound/users/fixtures.rs",
    "use actix_web::HttpResponse; fn load() {}",
    false
)]
#[case(
    "outbound/system/os_system_info_gateway.rs",
    "use inbound::http; fn thing() { let _ = 1; }",
    false
)]
fn detects_boundary_violations(#[case] file: &str, #[case] contents: &str, #[case] ok: bool) {
    let result = lint_single(file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
#[case(&["crate", "server", "build_app"], Some("server"))]
#[case(&["super", "super", "ports", "UsersRepository"], Some("ports"))]
#[case(&["roster", "outbound", "users"], Some("outbound"))]
#[case(&["middleware", "Trace"], Some("middleware"))]
#[case(&["serde", "Serialize"], None)]
fn resolves_internal_module_roots(#[case] segments: &[&str], #[case] expected: Option<&str>) {
    let segments = segments.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
    assert_eq!(internal_module_root(&segments), expected);
}

#[rstest]
fn files_outside_the_linted_layers_are_rejected() {
    let err = lint_single("server/mod.rs", "fn main() {}").expect_err("unknown layer");
    assert!(matches!(err, ArchitectureLintError::Parse { .. }), "{err:?}");
}

#[rstest]
fn unparsable_sources_report_the_file() {
    let err = lint_single("domain/user.rs", "fn broken( {").expect_err("parse error");
    match err {
        ArchitectureLintError::Parse { file, .. } => assert_eq!(file, "domain/user.rs"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[rstest]
fn violations_render_one_per_line() {
    let err = lint_sources(&[
        LintSource::new("domain/a.rs", "use sysinfo::Networks;"),
        LintSource::new("outbound/b.rs", "use utoipa::ToSchema;"),
    ])
    .expect_err("violations");
    let rendered = err.to_string();
    assert!(rendered.starts_with("architecture boundary violations:"));
    assert!(rendered.contains("- domain/a.rs: domain module must not depend on external crate `sysinfo`"));
    assert!(rendered.contains("- outbound/b.rs: outbound module must not depend on external crate `utoipa`"));
}
