//! Shared types, errors and run configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{GridError, Result};
pub use types::{Direction, EntityId, GridPos, Operation};
