//! Obstacle queries for movement and look-ahead
//!
//! A cell is blocked for the player by a piston base (always), by an
//! extended piston head, or by a box. Goals and slide floors never block.
//! Queries are pure reads and may run any number of times between ticks.

use crate::core::types::{Direction, GridPos};
use crate::simulation::phase::PhaseClock;
use crate::world::entity::{Entity, EntityKind};
use crate::world::state::WorldState;

/// Returns true if `entity` occupies `cell` for the player at this phase
pub fn blocks(entity: &Entity, cell: GridPos, phase: &PhaseClock) -> bool {
    match entity.kind {
        EntityKind::Piston { phase_slot, .. } => {
            entity.position == cell
                || (phase.is_extended(phase_slot) && entity.piston_head() == Some(cell))
        }
        EntityKind::Box => entity.position == cell,
        EntityKind::Player | EntityKind::Goal | EntityKind::SlideFloor { .. } => false,
    }
}

/// Returns true if any non-player entity blocks `cell`
pub fn is_blocked(world: &WorldState, phase: &PhaseClock, cell: GridPos) -> bool {
    world.others().any(|entity| blocks(entity, cell, phase))
}

/// Read-only look-ahead around the player
///
/// Does not check board bounds: a cell off the edge is reported as free,
/// and the move into it then fails on its own.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleQuery<'a> {
    world: &'a WorldState,
    phase: &'a PhaseClock,
}

impl<'a> ObstacleQuery<'a> {
    pub fn new(world: &'a WorldState, phase: &'a PhaseClock) -> Self {
        Self { world, phase }
    }

    /// Check an arbitrary cell
    pub fn is_blocked(&self, cell: GridPos) -> bool {
        is_blocked(self.world, self.phase, cell)
    }

    /// Check the cell adjacent to the player along `direction`
    pub fn toward(&self, direction: Direction) -> bool {
        self.is_blocked(self.world.player_position().step(direction))
    }

    pub fn right(&self) -> bool {
        self.toward(Direction::Right)
    }

    pub fn left(&self) -> bool {
        self.toward(Direction::Left)
    }

    pub fn up(&self) -> bool {
        self.toward(Direction::Up)
    }

    pub fn down(&self) -> bool {
        self.toward(Direction::Down)
    }
}
