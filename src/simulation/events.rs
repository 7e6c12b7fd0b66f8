//! Move events and the move-plan log
//!
//! The serialized shape is a contract with the external renderer, which
//! pattern-matches on the `type` and `action` strings. Do not rename them.

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, EntityId, GridPos};

/// What happened to the player in one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "move")]
    Move,
    #[serde(rename = "failure-right")]
    FailRight,
    #[serde(rename = "failure-left")]
    FailLeft,
    #[serde(rename = "failure-up")]
    FailUp,
    #[serde(rename = "failure-down")]
    FailDown,
    #[serde(rename = "success")]
    Success,
}

impl PlayerAction {
    /// The failure action for a blocked move in `direction`
    pub fn failure(direction: Direction) -> Self {
        match direction {
            Direction::Right => PlayerAction::FailRight,
            Direction::Left => PlayerAction::FailLeft,
            Direction::Up => PlayerAction::FailUp,
            Direction::Down => PlayerAction::FailDown,
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(
            self,
            PlayerAction::FailRight
                | PlayerAction::FailLeft
                | PlayerAction::FailUp
                | PlayerAction::FailDown
        )
    }
}

/// What a piston did during a passive sub-tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PistonAction {
    Activate,
    Deactivate,
}

/// A single renderer-visible event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveEvent {
    #[serde(rename = "player")]
    Player {
        #[serde(rename = "id")]
        entity_id: EntityId,
        /// Player cell after the event (unchanged for failures)
        #[serde(rename = "move")]
        displacement: GridPos,
        action: PlayerAction,
    },
    #[serde(rename = "piston")]
    Piston {
        #[serde(rename = "id")]
        entity_id: EntityId,
        #[serde(rename = "direction")]
        facing: Direction,
        action: PistonAction,
    },
}

impl MoveEvent {
    pub fn player(entity_id: EntityId, displacement: GridPos, action: PlayerAction) -> Self {
        MoveEvent::Player {
            entity_id,
            displacement,
            action,
        }
    }

    pub fn piston(entity_id: EntityId, facing: Direction, action: PistonAction) -> Self {
        MoveEvent::Piston {
            entity_id,
            facing,
            action,
        }
    }

    pub fn entity_id(&self) -> &EntityId {
        match self {
            MoveEvent::Player { entity_id, .. } | MoveEvent::Piston { entity_id, .. } => entity_id,
        }
    }

    /// The player action, `None` for piston events
    pub fn player_action(&self) -> Option<PlayerAction> {
        match self {
            MoveEvent::Player { action, .. } => Some(*action),
            MoveEvent::Piston { .. } => None,
        }
    }
}

/// Events produced by one call into the tick engine, in emission order
pub type TickEvents = Vec<MoveEvent>;

/// Append-only replay record, one entry per tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovePlanLog {
    ticks: Vec<TickEvents>,
}

impl MovePlanLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, events: TickEvents) {
        self.ticks.push(events);
    }

    pub fn ticks(&self) -> &[TickEvents] {
        &self.ticks
    }

    /// Number of ticks recorded
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn last(&self) -> Option<&TickEvents> {
        self.ticks.last()
    }

    /// All events flattened across ticks
    pub fn events(&self) -> impl Iterator<Item = &MoveEvent> {
        self.ticks.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_event_wire_shape() {
        let event = MoveEvent::player(
            EntityId::new("player-1"),
            GridPos::new(4, 3),
            PlayerAction::FailRight,
        );
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "player",
                "id": "player-1",
                "move": { "x": 4, "z": 3 },
                "action": "failure-right"
            })
        );
    }

    #[test]
    fn test_piston_event_wire_shape() {
        let event = MoveEvent::piston(
            EntityId::new("piston-1"),
            Direction::Down,
            PistonAction::Activate,
        );
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "piston",
                "id": "piston-1",
                "direction": "down",
                "action": "activate"
            })
        );
    }

    #[test]
    fn test_renderer_payload_parses() {
        let raw = r#"[[{"id":"p","type":"player","move":{"x":1,"z":3},"action":"start"}],[]]"#;
        let log: MovePlanLog = serde_json::from_str(raw).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.ticks()[0][0].player_action(), Some(PlayerAction::Start));
        assert!(log.ticks()[1].is_empty());
    }

    #[test]
    fn test_failure_for_direction() {
        assert_eq!(PlayerAction::failure(Direction::Down), PlayerAction::FailDown);
        assert!(PlayerAction::FailUp.is_failure());
        assert!(!PlayerAction::Move.is_failure());
    }
}
