//! Built-in maps
//!
//! The three shipped levels. Piston phase slots are pinned so every preset
//! replays identically.

use crate::core::error::{GridError, Result};
use crate::core::types::Direction;
use crate::world::loader::{EntityConfig, MapConfig};

pub const PRESET_NAMES: [&str; 3] = ["map1", "map2", "map3"];

/// Open field with two boxes between the player and the goal
pub fn map1() -> MapConfig {
    MapConfig::new("map1", 5)
        .with_seed(1)
        .with_entity(EntityConfig::goal_at(5, 5))
        .with_entity(EntityConfig::player_at(3, 3))
        .with_entity(EntityConfig::box_at(3, 4))
        .with_entity(EntityConfig::box_at(5, 3))
}

/// Two downward pistons guarding the corridor, slide floors behind the player
pub fn map2() -> MapConfig {
    MapConfig::new("map2", 7)
        .with_seed(2)
        .with_entity(EntityConfig::goal_at(7, 2))
        .with_entity(EntityConfig::player_at(1, 3))
        .with_entity(EntityConfig::piston_at(3, 4, Direction::Down).phase_slot(2))
        .with_entity(EntityConfig::piston_at(6, 4, Direction::Down).phase_slot(1))
        .with_entity(EntityConfig::box_at(4, 2))
        .with_entity(EntityConfig::slide_floor_at(2, 2, Direction::Left))
        .with_entity(EntityConfig::slide_floor_at(1, 2, Direction::Left))
}

/// A conveyor loop of slide floors and a piston that launches onto the goal row
pub fn map3() -> MapConfig {
    MapConfig::new("map3", 4)
        .with_seed(3)
        .with_entity(EntityConfig::goal_at(7, 2))
        .with_entity(EntityConfig::player_at(1, 4))
        .with_entity(EntityConfig::slide_floor_at(2, 4, Direction::Right))
        .with_entity(EntityConfig::slide_floor_at(3, 4, Direction::Right))
        .with_entity(EntityConfig::slide_floor_at(4, 4, Direction::Right))
        .with_entity(EntityConfig::slide_floor_at(5, 4, Direction::Right))
        .with_entity(EntityConfig::slide_floor_at(6, 4, Direction::Up))
        .with_entity(EntityConfig::slide_floor_at(6, 5, Direction::Up))
        .with_entity(EntityConfig::slide_floor_at(6, 6, Direction::Left))
        .with_entity(EntityConfig::box_at(4, 5))
        .with_entity(EntityConfig::box_at(7, 4))
        .with_entity(EntityConfig::piston_at(3, 2, Direction::Right).phase_slot(2))
        .with_entity(EntityConfig::slide_floor_at(5, 2, Direction::Right))
        .with_entity(EntityConfig::slide_floor_at(6, 2, Direction::Right))
}

/// Look up a preset by name
pub fn by_name(name: &str) -> Result<MapConfig> {
    match name {
        "map1" => Ok(map1()),
        "map2" => Ok(map2()),
        "map3" => Ok(map3()),
        other => Err(GridError::UnknownMap(other.to_string())),
    }
}
