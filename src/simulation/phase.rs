//! Phase clock - the bounded counter that drives piston timing
//!
//! Cycles 0, 1, 2, 3, 4, 0, ... and moves exactly one step per passive
//! sub-tick. A piston whose phase slot equals the current reading is
//! extended. Slot 0 belongs to no piston, so every piston is retracted at
//! least once per cycle.

use serde::{Deserialize, Serialize};

use crate::core::config::PHASE_WINDOW;
use crate::core::error::{GridError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseClock {
    phase: u8,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at a given reading inside the window
    pub fn starting_at(phase: u8) -> Result<Self> {
        if phase >= PHASE_WINDOW {
            return Err(GridError::InvalidPhase(phase));
        }
        Ok(Self { phase })
    }

    pub fn current(&self) -> u8 {
        self.phase
    }

    /// Returns true if a piston with this slot is extended right now
    pub fn is_extended(&self, phase_slot: u8) -> bool {
        self.phase == phase_slot
    }

    /// Step the clock once. Only the passive sub-tick calls this.
    pub(crate) fn advance(&mut self) {
        self.phase += 1;
        if self.phase % PHASE_WINDOW == 0 {
            self.phase = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_cycles_through_window() {
        let mut clock = PhaseClock::new();
        let mut seen = Vec::new();
        for _ in 0..11 {
            clock.advance();
            seen.push(clock.current());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn test_starting_phase_validated() {
        assert_eq!(PhaseClock::starting_at(4).unwrap().current(), 4);
        assert!(PhaseClock::starting_at(5).is_err());
    }

    #[test]
    fn test_extension_matches_slot() {
        let clock = PhaseClock::starting_at(2).unwrap();
        assert!(clock.is_extended(2));
        assert!(!clock.is_extended(1));
    }
}
