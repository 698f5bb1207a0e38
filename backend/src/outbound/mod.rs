//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **users**: in-memory user repository backed by a fixture set, loaded
//!   from a JSON file or the built-in demo records.
//! - **system**: host network inspection backing the system info gateway.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod system;
pub mod users;
