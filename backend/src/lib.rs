//! Roster service library.
//!
//! A small read-only user directory with a health endpoint, laid out as a
//! hexagon: `domain` holds entities, ports and use cases; `outbound` holds
//! adapters for storage and the host; `inbound::http` exposes the REST API;
//! `server` wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
