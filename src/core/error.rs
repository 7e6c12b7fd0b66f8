use thiserror::Error;

use crate::core::types::{EntityId, GridPos};

#[derive(Error, Debug)]
pub enum GridError {
    #[error("World has no player entity")]
    MissingPlayer,

    #[error("World has more than one player entity: {0} and {1}")]
    MultiplePlayers(EntityId, EntityId),

    #[error("Entity {id} placed off the board at {position}")]
    OffBoard { id: EntityId, position: GridPos },

    #[error("Piston {id} has phase slot {slot}, expected 1..=4")]
    InvalidPhaseSlot { id: EntityId, slot: u8 },

    #[error("Initial phase {0} is outside the phase window 0..=4")]
    InvalidPhase(u8),

    #[error("Duplicate entity id: {0}")]
    DuplicateId(EntityId),

    #[error("{kind} at {position} needs a facing direction")]
    MissingFacing { kind: &'static str, position: GridPos },

    #[error("Unknown map preset: {0}")]
    UnknownMap(String),

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
