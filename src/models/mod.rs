//! Wire records shared by the API and the storage schema.
//!
//! - **user**: `User`, `Email`, `EmailError`.
//! - **profile**: `Profile`.
//! - **connection**: `Connection`, `ConnectionStatus`, `InvalidStatus`, `StatusBody`.
//! - **value_interest**: `ValueInterest`.
//! - **graph**: `GraphData` and its nodes and edges.
//!
//! Foreign-key-shaped fields (`user_id`, `user1_id`, …) are plain integers;
//! nothing checks that the referenced row exists.

pub mod connection;
pub mod graph;
pub mod profile;
pub mod user;
pub mod value_interest;

pub use connection::{Connection, ConnectionStatus, InvalidStatus, StatusBody};
pub use graph::{GraphData, GraphEdge, GraphNode};
pub use profile::Profile;
pub use user::{Email, EmailError, User};
pub use value_interest::ValueInterest;
