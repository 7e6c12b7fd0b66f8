//! Tick engine - turns one operation into world mutation plus events
//!
//! A directional operation is the active sub-tick: the player tries to step
//! one cell and either moves or fails in place. `Stay` is the passive
//! sub-tick: the phase clock advances, a player resting on a goal succeeds,
//! and otherwise pistons and slide floors act in registration order.
//!
//! Pushes and redirections are applied as-is, without re-checking the
//! destination against the board edge or other entities.

use crate::core::types::{Direction, Operation};
use crate::simulation::events::{MoveEvent, PistonAction, PlayerAction, TickEvents};
use crate::simulation::phase::PhaseClock;
use crate::world::blocking::is_blocked;
use crate::world::entity::EntityKind;
use crate::world::state::WorldState;

/// The state-transition function of one run. Owns the phase clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEngine {
    phase: PhaseClock,
}

impl TickEngine {
    pub fn new(phase: PhaseClock) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> &PhaseClock {
        &self.phase
    }

    /// Resolve one operation against `world`
    pub fn resolve(&mut self, world: &mut WorldState, operation: Operation) -> TickEvents {
        let events = match operation.direction() {
            Some(direction) => self.resolve_move(world, direction),
            None => self.resolve_settle(world),
        };
        tracing::debug!(
            ?operation,
            phase = self.phase.current(),
            events = events.len(),
            "Resolved tick"
        );
        events
    }

    fn resolve_move(&self, world: &mut WorldState, direction: Direction) -> TickEvents {
        let player = world.player();
        let from = player.position;
        let candidate = from.step(direction);

        if !candidate.on_board() || is_blocked(world, &self.phase, candidate) {
            return vec![MoveEvent::player(
                player.id.clone(),
                from,
                PlayerAction::failure(direction),
            )];
        }

        let id = player.id.clone();
        world.set_player_position(candidate);
        vec![MoveEvent::player(id, candidate, PlayerAction::Move)]
    }

    fn resolve_settle(&mut self, world: &mut WorldState) -> TickEvents {
        self.phase.advance();

        let player_id = world.player().id.clone();
        let resting = world.player_position();
        if world.goal_at(resting) {
            tracing::info!(%player_id, position = %resting, "Goal reached");
            return vec![MoveEvent::player(player_id, resting, PlayerAction::Success)];
        }

        let mut events = Vec::new();
        let mut redirected = false;

        for idx in 0..world.len() {
            let entity = &world.entities()[idx];
            let (id, base, kind) = (entity.id.clone(), entity.position, entity.kind);

            match kind {
                EntityKind::Piston { facing, phase_slot } => {
                    if !self.phase.is_extended(phase_slot) {
                        events.push(MoveEvent::piston(id, facing, PistonAction::Deactivate));
                        continue;
                    }
                    let head = base.step(facing);
                    if world.player_position() == head {
                        let pushed = head.step(facing);
                        tracing::trace!(piston = %id, to = %pushed, "Piston pushed player");
                        world.set_player_position(pushed);
                        events.push(MoveEvent::player(
                            player_id.clone(),
                            pushed,
                            PlayerAction::Move,
                        ));
                    }
                    events.push(MoveEvent::piston(id, facing, PistonAction::Activate));
                }
                EntityKind::SlideFloor { facing } => {
                    if redirected || world.player_position() != base {
                        continue;
                    }
                    redirected = true;
                    let slid = base.step(facing);
                    tracing::trace!(floor = %id, to = %slid, "Slide floor redirected player");
                    world.set_player_position(slid);
                    events.push(MoveEvent::player(player_id.clone(), slid, PlayerAction::Move));
                }
                EntityKind::Player | EntityKind::Goal | EntityKind::Box => {}
            }
        }

        events
    }
}
