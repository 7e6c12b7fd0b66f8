//! Bounded repeat - the only loop construct scripts get
//!
//! Runs an action while a predicate holds, but never more than
//! [`REPEAT_CEILING`] times. Untrusted scripts cannot spin forever.

use crate::core::config::REPEAT_CEILING;

/// How a bounded repeat ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatOutcome {
    /// Number of times the action ran
    pub iterations: usize,
    /// True if the loop stopped on the ceiling rather than the predicate
    pub hit_ceiling: bool,
}

/// Repeat `action` while `predicate` returns true, up to the ceiling
pub fn bounded_repeat<P, A>(mut predicate: P, mut action: A) -> RepeatOutcome
where
    P: FnMut() -> bool,
    A: FnMut(),
{
    let mut unit = ();
    bounded_repeat_with(&mut unit, |_| predicate(), |_| action())
}

/// Same as [`bounded_repeat`], threading mutable state through both closures
pub fn bounded_repeat_with<S, P, A>(state: &mut S, mut predicate: P, mut action: A) -> RepeatOutcome
where
    S: ?Sized,
    P: FnMut(&S) -> bool,
    A: FnMut(&mut S),
{
    let mut iterations = 0;
    while iterations < REPEAT_CEILING && predicate(state) {
        action(state);
        iterations += 1;
    }

    let hit_ceiling = iterations == REPEAT_CEILING;
    if hit_ceiling {
        tracing::debug!(ceiling = REPEAT_CEILING, "Repeat stopped at ceiling");
    }
    RepeatOutcome {
        iterations,
        hit_ceiling,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_true_stops_at_ceiling() {
        let mut count = 0;
        let outcome = bounded_repeat(|| true, || count += 1);
        assert_eq!(count, 10);
        assert_eq!(outcome.iterations, 10);
        assert!(outcome.hit_ceiling);
    }

    #[test]
    fn test_false_predicate_never_runs_action() {
        let mut count = 0;
        let outcome = bounded_repeat(|| false, || count += 1);
        assert_eq!(count, 0);
        assert!(!outcome.hit_ceiling);
    }

    #[test]
    fn test_predicate_sees_state_changes() {
        let mut remaining = 3;
        let outcome = bounded_repeat_with(&mut remaining, |r| *r > 0, |r| *r -= 1);
        assert_eq!(remaining, 0);
        assert_eq!(outcome.iterations, 3);
        assert!(!outcome.hit_ceiling);
    }

    #[test]
    fn test_predicate_not_consulted_after_ceiling() {
        let mut checks = 0;
        bounded_repeat(
            || {
                checks += 1;
                true
            },
            || {},
        );
        assert_eq!(checks, 10);
    }
}
