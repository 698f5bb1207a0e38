//! Server construction and middleware wiring.
//!
//! This is the composition root: it turns [`ServerConfig`] into adapters,
//! use cases and an Actix app.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;
mod state_builders;

pub use config::{DEFAULT_INTERFACE_TIMEOUT, ServerConfig};
pub use settings::{InvalidHostError, ServerSettings};
pub use state_builders::{CompositionError, build_http_state};

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::HttpState;
use crate::inbound::http::health::{HealthState, health, live, ready};
use crate::inbound::http::users::{get_user, list_users};
use crate::middleware::Trace;

/// Shared state handed to every app instance.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Register routes and middleware on a fresh [`App`].
///
/// # Examples
/// ```
/// use std::net::SocketAddr;
/// use actix_web::web;
/// use roster::inbound::http::health::HealthState;
/// use roster::server::{AppDependencies, ServerConfig, build_app, build_http_state};
///
/// let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
/// let http_state = build_http_state(&config).expect("demo state");
/// let _app = build_app(AppDependencies {
///     health_state: web::Data::new(HealthState::new()),
///     http_state: web::Data::new(http_state),
/// });
/// ```
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api").service(list_users).service(get_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .route("/health", web::get().to(health))
        .route("/healthz", web::get().to(health))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness is marked once the listener is bound.
///
/// # Errors
/// Returns [`CompositionError`] when fixtures cannot be loaded or the socket
/// cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> Result<Server, CompositionError> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config)?);
    let bind_addr = config.bind_addr();

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(config.prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)
    .map_err(|source| CompositionError::Bind {
        addr: bind_addr,
        source,
    })?;

    for addr in server.addrs() {
        info!(%addr, "server listening");
    }
    let server = server.run();

    health_state.mark_ready();
    Ok(server)
}
