//! User storage adapters.

mod fixtures;
mod in_memory_users_repository;

pub use fixtures::{FixtureLoadError, UserFixtures};
pub use in_memory_users_repository::InMemoryUsersRepository;
