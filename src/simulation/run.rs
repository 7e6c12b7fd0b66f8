//! Simulation run - the engine-facing contract used by command scripts
//!
//! One `SimulationRun` owns everything a run mutates: the world, the tick
//! engine (and with it the phase clock), the energy ledger and the move-plan
//! log. Nothing is shared between runs.
//!
//! Each directional command is one atomic unit: the active sub-tick and
//! the passive sub-tick are both resolved before either is logged.

use serde::{Deserialize, Serialize};

use crate::core::config::RunConfig;
use crate::core::error::Result;
use crate::core::types::{Direction, Operation};
use crate::simulation::energy::EnergyLedger;
use crate::simulation::events::{MoveEvent, MovePlanLog, PlayerAction};
use crate::simulation::phase::PhaseClock;
use crate::simulation::repeat::{bounded_repeat_with, RepeatOutcome};
use crate::simulation::tick::TickEngine;
use crate::world::blocking::ObstacleQuery;
use crate::world::entity::{Entity, EntityRecord};
use crate::world::state::WorldState;

/// Full observable result of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResult {
    /// Entities at their starting positions, for the renderer to replay from
    pub objects: Vec<EntityRecord>,
    pub move_plan: MovePlanLog,
    pub energy_history: Vec<i32>,
}

impl SimulateResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
pub struct SimulationRun {
    config: RunConfig,
    initial: Vec<Entity>,
    world: WorldState,
    engine: TickEngine,
    ledger: EnergyLedger,
    log: MovePlanLog,
}

impl SimulationRun {
    /// Start a run. The log opens with a `start` tick at the player's cell.
    pub fn new(world: WorldState, config: RunConfig) -> Result<Self> {
        config.validate()?;
        let phase = PhaseClock::starting_at(config.initial_phase)?;

        let player = world.player();
        let mut log = MovePlanLog::new();
        log.append(vec![MoveEvent::player(
            player.id.clone(),
            player.position,
            PlayerAction::Start,
        )]);

        tracing::info!(
            entities = world.len(),
            energy = config.energy,
            phase = config.initial_phase,
            "Simulation run created"
        );

        Ok(Self {
            initial: world.entities().to_vec(),
            ledger: EnergyLedger::new(config.energy),
            engine: TickEngine::new(phase),
            config,
            world,
            log,
        })
    }

    // === COMMANDS ===

    pub fn move_right(&mut self) -> bool {
        self.move_toward(Direction::Right)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_toward(Direction::Left)
    }

    pub fn move_up(&mut self) -> bool {
        self.move_toward(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_toward(Direction::Down)
    }

    /// Directional command followed by the automatic settle
    ///
    /// Returns false, with no log or history entry, once energy is spent.
    pub fn move_toward(&mut self, direction: Direction) -> bool {
        if self.ledger.is_exhausted() {
            tracing::debug!(%direction, "Out of energy, move dropped");
            return false;
        }

        let active = self.engine.resolve(&mut self.world, Operation::from(direction));
        let passive = self.engine.resolve(&mut self.world, Operation::Stay);

        self.log.append(active);
        self.ledger.spend();
        self.log.append(passive);
        self.ledger.hold();
        true
    }

    /// Explicit passive sub-tick
    ///
    /// Gated on energy like a move. Spends a unit only when the run is
    /// configured with `stay_costs_energy`.
    pub fn stay(&mut self) -> bool {
        if self.ledger.is_exhausted() {
            tracing::debug!("Out of energy, stay dropped");
            return false;
        }

        let events = self.engine.resolve(&mut self.world, Operation::Stay);
        self.log.append(events);
        if self.config.stay_costs_energy {
            self.ledger.spend();
        } else {
            self.ledger.hold();
        }
        true
    }

    /// Dispatch any operation through the matching command
    pub fn apply(&mut self, operation: Operation) -> bool {
        match operation.direction() {
            Some(direction) => self.move_toward(direction),
            None => self.stay(),
        }
    }

    // === LOOK-AHEAD ===

    pub fn obstacles(&self) -> ObstacleQuery<'_> {
        ObstacleQuery::new(&self.world, self.engine.phase())
    }

    pub fn is_obstacle(&self, direction: Direction) -> bool {
        self.obstacles().toward(direction)
    }

    pub fn is_obstacle_right(&self) -> bool {
        self.obstacles().right()
    }

    pub fn is_obstacle_left(&self) -> bool {
        self.obstacles().left()
    }

    pub fn is_obstacle_up(&self) -> bool {
        self.obstacles().up()
    }

    pub fn is_obstacle_down(&self) -> bool {
        self.obstacles().down()
    }

    /// Bounded loop over this run, capped at ten iterations
    pub fn repeat<P, A>(&mut self, predicate: P, action: A) -> RepeatOutcome
    where
        P: FnMut(&SimulationRun) -> bool,
        A: FnMut(&mut SimulationRun),
    {
        bounded_repeat_with(self, predicate, action)
    }

    // === RESULT ===

    pub fn simulate_result(&self) -> SimulateResult {
        SimulateResult {
            objects: self.initial.iter().map(EntityRecord::from).collect(),
            move_plan: self.log.clone(),
            energy_history: self.ledger.history().to_vec(),
        }
    }

    pub fn into_result(self) -> SimulateResult {
        SimulateResult {
            objects: self.initial.iter().map(EntityRecord::from).collect(),
            move_plan: self.log,
            energy_history: self.ledger.history().to_vec(),
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn phase(&self) -> u8 {
        self.engine.phase().current()
    }

    pub fn remaining_energy(&self) -> i32 {
        self.ledger.remaining()
    }

    pub fn energy_history(&self) -> &[i32] {
        self.ledger.history()
    }

    pub fn log(&self) -> &MovePlanLog {
        &self.log
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// True once the player has settled on a goal at least once
    pub fn reached_goal(&self) -> bool {
        self.log
            .events()
            .any(|event| event.player_action() == Some(PlayerAction::Success))
    }
}
