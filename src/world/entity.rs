//! Entities on the board
//!
//! Every object is an [`Entity`] with an id, a cell and an [`EntityKind`].
//! Kind-specific attributes live on the variant so the tick engine and the
//! obstacle query can dispatch with an exhaustive `match`.

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, EntityId, GridPos};

/// Type discriminant as it appears on the wire (`"type"` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityTag {
    Player,
    Goal,
    Piston,
    #[serde(alias = "slide_floor")]
    SlideFloor,
    Box,
}

impl EntityTag {
    /// Prefix used for generated ids (`"slideFloor-<uuid>"`)
    pub fn name(self) -> &'static str {
        match self {
            EntityTag::Player => "player",
            EntityTag::Goal => "goal",
            EntityTag::Piston => "piston",
            EntityTag::SlideFloor => "slideFloor",
            EntityTag::Box => "box",
        }
    }
}

/// What an entity is, with its kind-specific attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The controllable agent. Exactly one per world.
    Player,
    /// Success cell. Never blocks.
    Goal,
    /// Occupies its base cell permanently, and the cell in front of it
    /// while the phase clock reads `phase_slot`.
    Piston { facing: Direction, phase_slot: u8 },
    /// Redirects a player that ends a passive sub-tick on it.
    SlideFloor { facing: Direction },
    /// Immovable, always blocking.
    Box,
}

impl EntityKind {
    pub fn tag(&self) -> EntityTag {
        match self {
            EntityKind::Player => EntityTag::Player,
            EntityKind::Goal => EntityTag::Goal,
            EntityKind::Piston { .. } => EntityTag::Piston,
            EntityKind::SlideFloor { .. } => EntityTag::SlideFloor,
            EntityKind::Box => EntityTag::Box,
        }
    }

    pub fn facing(&self) -> Option<Direction> {
        match self {
            EntityKind::Piston { facing, .. } | EntityKind::SlideFloor { facing } => Some(*facing),
            EntityKind::Player | EntityKind::Goal | EntityKind::Box => None,
        }
    }
}

/// A single object on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub position: GridPos,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: EntityId, position: GridPos, kind: EntityKind) -> Self {
        Self { id, position, kind }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player)
    }

    /// Cell covered by the piston head while extended, `None` for non-pistons
    pub fn piston_head(&self) -> Option<GridPos> {
        match self.kind {
            EntityKind::Piston { facing, .. } => Some(self.position.step(facing)),
            _ => None,
        }
    }

    pub fn to_record(&self) -> EntityRecord {
        EntityRecord::from(self)
    }
}

/// Serialized form of an entity, as consumed by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub tag: EntityTag,
    pub position: GridPos,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_number: Option<u8>,
}

impl From<&Entity> for EntityRecord {
    fn from(entity: &Entity) -> Self {
        let event_number = match entity.kind {
            EntityKind::Piston { phase_slot, .. } => Some(phase_slot),
            _ => None,
        };
        Self {
            id: entity.id.clone(),
            tag: entity.kind.tag(),
            position: entity.position,
            direction: entity.kind.facing(),
            event_number,
        }
    }
}
