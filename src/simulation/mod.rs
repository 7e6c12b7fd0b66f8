//! Tick resolution: phase clock, tick engine, energy ledger and move-plan log

pub mod energy;
pub mod events;
pub mod phase;
pub mod repeat;
pub mod run;
pub mod tick;

pub use energy::EnergyLedger;
pub use events::{MoveEvent, MovePlanLog, PistonAction, PlayerAction, TickEvents};
pub use phase::PhaseClock;
pub use repeat::{bounded_repeat, bounded_repeat_with, RepeatOutcome};
pub use run::{SimulateResult, SimulationRun};
pub use tick::TickEngine;
