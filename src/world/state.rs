//! World state - the fixed set of entities and their positions
//!
//! Membership is decided at construction and never changes. Only the
//! player's position is mutated afterwards, and only by the tick engine.

use ahash::AHashSet;

use crate::core::config::{MAX_PHASE_SLOT, MIN_PHASE_SLOT};
use crate::core::error::{GridError, Result};
use crate::core::types::GridPos;
use crate::world::entity::{Entity, EntityKind};

/// All entities of one simulation run, in registration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    entities: Vec<Entity>,
    player: usize,
}

impl WorldState {
    /// Build a world, failing fast on malformed configuration
    ///
    /// Requires exactly one player, unique ids, every entity on the board,
    /// and piston phase slots inside `1..=4`.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(entities.len());
        let mut player: Option<usize> = None;

        for (idx, entity) in entities.iter().enumerate() {
            if !seen.insert(entity.id.clone()) {
                return Err(GridError::DuplicateId(entity.id.clone()));
            }
            if !entity.position.on_board() {
                return Err(GridError::OffBoard {
                    id: entity.id.clone(),
                    position: entity.position,
                });
            }
            match entity.kind {
                EntityKind::Player => {
                    if let Some(existing) = player {
                        return Err(GridError::MultiplePlayers(
                            entities[existing].id.clone(),
                            entity.id.clone(),
                        ));
                    }
                    player = Some(idx);
                }
                EntityKind::Piston { phase_slot, .. } => {
                    if !(MIN_PHASE_SLOT..=MAX_PHASE_SLOT).contains(&phase_slot) {
                        return Err(GridError::InvalidPhaseSlot {
                            id: entity.id.clone(),
                            slot: phase_slot,
                        });
                    }
                }
                EntityKind::Goal | EntityKind::SlideFloor { .. } | EntityKind::Box => {}
            }
        }

        let player = player.ok_or(GridError::MissingPlayer)?;
        Ok(Self { entities, player })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn player(&self) -> &Entity {
        &self.entities[self.player]
    }

    pub fn player_position(&self) -> GridPos {
        self.entities[self.player].position
    }

    /// Every entity except the player, in registration order
    pub fn others(&self) -> impl Iterator<Item = &Entity> {
        let player = self.player;
        self.entities
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != player)
            .map(|(_, entity)| entity)
    }

    /// Returns true if any goal sits on `cell`
    pub fn goal_at(&self, cell: GridPos) -> bool {
        self.entities
            .iter()
            .any(|entity| matches!(entity.kind, EntityKind::Goal) && entity.position == cell)
    }

    pub(crate) fn set_player_position(&mut self, position: GridPos) {
        self.entities[self.player].position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Direction, EntityId};

    fn player(x: i32, z: i32) -> Entity {
        Entity::new(EntityId::new("player"), GridPos::new(x, z), EntityKind::Player)
    }

    #[test]
    fn test_world_requires_player() {
        let goal = Entity::new(EntityId::new("goal"), GridPos::new(5, 5), EntityKind::Goal);
        assert!(matches!(
            WorldState::new(vec![goal]),
            Err(GridError::MissingPlayer)
        ));
    }

    #[test]
    fn test_world_rejects_second_player() {
        let mut second = player(1, 1);
        second.id = EntityId::new("player-2");
        let result = WorldState::new(vec![player(0, 0), second]);
        assert!(matches!(result, Err(GridError::MultiplePlayers(_, _))));
    }

    #[test]
    fn test_world_rejects_off_board_entity() {
        let wall = Entity::new(EntityId::new("box"), GridPos::new(8, 0), EntityKind::Box);
        let result = WorldState::new(vec![player(0, 0), wall]);
        assert!(matches!(result, Err(GridError::OffBoard { .. })));
    }

    #[test]
    fn test_world_rejects_bad_phase_slot() {
        let piston = Entity::new(
            EntityId::new("piston"),
            GridPos::new(2, 2),
            EntityKind::Piston {
                facing: Direction::Up,
                phase_slot: 0,
            },
        );
        let result = WorldState::new(vec![player(0, 0), piston]);
        assert!(matches!(
            result,
            Err(GridError::InvalidPhaseSlot { slot: 0, .. })
        ));
    }

    #[test]
    fn test_world_rejects_duplicate_ids() {
        let a = Entity::new(EntityId::new("dup"), GridPos::new(1, 1), EntityKind::Box);
        let b = Entity::new(EntityId::new("dup"), GridPos::new(2, 2), EntityKind::Box);
        let result = WorldState::new(vec![player(0, 0), a, b]);
        assert!(matches!(result, Err(GridError::DuplicateId(_))));
    }

    #[test]
    fn test_others_skips_player_and_keeps_order() {
        let a = Entity::new(EntityId::new("a"), GridPos::new(1, 1), EntityKind::Box);
        let b = Entity::new(EntityId::new("b"), GridPos::new(2, 2), EntityKind::Goal);
        let world = WorldState::new(vec![a, player(0, 0), b]).unwrap();
        let ids: Vec<_> = world.others().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(world.player_position(), GridPos::new(0, 0));
        assert!(world.goal_at(GridPos::new(2, 2)));
        assert!(!world.goal_at(GridPos::new(1, 1)));
    }
}
