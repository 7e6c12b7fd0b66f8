//! Run configuration with documented constants
//!
//! Board geometry, clock window and loop ceiling are fixed by the puzzle
//! rules. The per-run knobs live in [`RunConfig`].

use serde::{Deserialize, Serialize};

use crate::core::error::{GridError, Result};

// === BOARD ===

/// Lowest valid coordinate on either axis
pub const BOARD_MIN: i32 = 0;

/// Highest valid coordinate on either axis (8x8 board, inclusive)
pub const BOARD_MAX: i32 = 7;

// === PHASE CLOCK ===

/// Number of slots the phase clock cycles through (0, 1, 2, 3, 4, 0, ...)
pub const PHASE_WINDOW: u8 = 5;

/// Lowest phase slot a piston may extend on
///
/// Slot 0 is never used, so every piston rests for at least one passive
/// sub-tick per cycle.
pub const MIN_PHASE_SLOT: u8 = 1;

/// Highest phase slot a piston may extend on
pub const MAX_PHASE_SLOT: u8 = 4;

// === SCRIPTS ===

/// Hard ceiling on bounded-repeat iterations
pub const REPEAT_CEILING: usize = 10;

/// Configuration for a single simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Starting action-energy budget
    pub energy: i32,

    /// Whether an explicit `stay()` spends one unit of energy
    ///
    /// Directional commands always spend one unit. The shipped maps leave
    /// this off: a stay records an unchanged budget.
    pub stay_costs_energy: bool,

    /// Phase clock value at the start of the run
    pub initial_phase: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            energy: 5,
            stay_costs_energy: false,
            initial_phase: 0,
        }
    }
}

impl RunConfig {
    pub fn new(energy: i32) -> Self {
        Self {
            energy,
            ..Self::default()
        }
    }

    pub fn with_stay_cost(mut self, stay_costs_energy: bool) -> Self {
        self.stay_costs_energy = stay_costs_energy;
        self
    }

    pub fn with_initial_phase(mut self, phase: u8) -> Self {
        self.initial_phase = phase;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.initial_phase >= PHASE_WINDOW {
            return Err(GridError::InvalidPhase(self.initial_phase));
        }
        Ok(())
    }
}
