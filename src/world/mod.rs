//! Board entities, world state, obstacle queries and map configuration

pub mod blocking;
pub mod entity;
pub mod loader;
pub mod presets;
pub mod state;

pub use blocking::{is_blocked, ObstacleQuery};
pub use entity::{Entity, EntityKind, EntityRecord, EntityTag};
pub use loader::{EntityConfig, MapConfig};
pub use state::WorldState;
