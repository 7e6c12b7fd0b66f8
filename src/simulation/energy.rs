//! Energy ledger - the finite action budget of a run

use serde::{Deserialize, Serialize};

/// Remaining budget plus one snapshot per tick
///
/// The history starts with the initial budget and gains one entry per
/// logged tick, so it stays the same length as the move-plan log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLedger {
    remaining: i32,
    history: Vec<i32>,
}

impl EnergyLedger {
    pub fn new(budget: i32) -> Self {
        Self {
            remaining: budget,
            history: vec![budget],
        }
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Returns true while commands may still run
    pub fn can_act(&self) -> bool {
        self.remaining > 0
    }

    pub fn is_exhausted(&self) -> bool {
        !self.can_act()
    }

    /// Spend one unit and record the new value
    pub fn spend(&mut self) {
        self.remaining -= 1;
        self.history.push(self.remaining);
    }

    /// Record the current value without spending
    pub fn hold(&mut self) {
        self.history.push(self.remaining);
    }

    pub fn history(&self) -> &[i32] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_with_budget() {
        let ledger = EnergyLedger::new(5);
        assert_eq!(ledger.history(), &[5]);
        assert!(ledger.can_act());
    }

    #[test]
    fn test_spend_and_hold() {
        let mut ledger = EnergyLedger::new(2);
        ledger.spend();
        ledger.hold();
        ledger.spend();
        assert_eq!(ledger.history(), &[2, 1, 1, 0]);
        assert!(ledger.is_exhausted());
    }

    #[test]
    fn test_zero_budget_is_exhausted() {
        assert!(EnergyLedger::new(0).is_exhausted());
        assert!(EnergyLedger::new(-3).is_exhausted());
    }
}
