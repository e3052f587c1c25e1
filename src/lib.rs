// Library root: exposes internals for integration tests.
// The binary entry point is src/main.rs.

pub mod api;
pub mod bootstrap;
pub mod core;
pub mod models;
pub mod store;

pub use bootstrap::logger;
pub use self::core::{config, error};
