//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::{BOARD_MAX, BOARD_MIN};

/// Unique identifier for entities
///
/// Opaque to the engine. Ids generated by the map loader look like
/// `piston-<uuid>`, but any unique string works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grid cell on the board
///
/// `x` grows to the right, `z` grows upward. Signed so that unchecked
/// piston pushes and floor redirections can be represented faithfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub z: i32,
}

impl GridPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The adjacent cell one step along `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dz) = direction.unit();
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// Returns true if the cell lies inside the inclusive board bounds
    pub fn on_board(self) -> bool {
        (BOARD_MIN..=BOARD_MAX).contains(&self.x) && (BOARD_MIN..=BOARD_MAX).contains(&self.z)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// One of the four board directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit vector as (dx, dz)
    pub fn unit(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse a lowercase direction name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "right" => Some(Direction::Right),
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to a single call into the tick engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Right,
    Left,
    Up,
    Down,
    Stay,
}

impl Operation {
    /// The movement direction, or `None` for the passive `Stay`
    pub fn direction(self) -> Option<Direction> {
        match self {
            Operation::Right => Some(Direction::Right),
            Operation::Left => Some(Direction::Left),
            Operation::Up => Some(Direction::Up),
            Operation::Down => Some(Direction::Down),
            Operation::Stay => None,
        }
    }
}

impl From<Direction> for Operation {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Right => Operation::Right,
            Direction::Left => Operation::Left,
            Direction::Up => Operation::Up,
            Direction::Down => Operation::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_follows_unit_vectors() {
        let origin = GridPos::new(3, 3);
        assert_eq!(origin.step(Direction::Right), GridPos::new(4, 3));
        assert_eq!(origin.step(Direction::Left), GridPos::new(2, 3));
        assert_eq!(origin.step(Direction::Up), GridPos::new(3, 4));
        assert_eq!(origin.step(Direction::Down), GridPos::new(3, 2));
    }

    #[test]
    fn test_board_bounds_are_inclusive() {
        assert!(GridPos::new(0, 0).on_board());
        assert!(GridPos::new(7, 7).on_board());
        assert!(!GridPos::new(-1, 3).on_board());
        assert!(!GridPos::new(3, 8).on_board());
    }

    #[test]
    fn test_direction_names_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_name(direction.name()), Some(direction));
        }
        assert_eq!(Direction::from_name("sideways"), None);
    }

    #[test]
    fn test_operation_direction() {
        assert_eq!(Operation::Stay.direction(), None);
        assert_eq!(Operation::from(Direction::Up).direction(), Some(Direction::Up));
    }
}
