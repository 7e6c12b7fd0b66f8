//! Command execution - drives a simulation run with a parsed script

use crate::command::script::{Script, ScriptStep};
use crate::simulation::run::SimulationRun;

/// Executes scripts against a run
pub struct CommandExecutor;

impl CommandExecutor {
    /// Run every step in order. Commands issued after energy runs out are
    /// counted as dropped; the run itself ignores them.
    pub fn execute(run: &mut SimulationRun, script: &Script) -> ExecutionResult {
        let mut result = ExecutionResult::default();

        for step in &script.steps {
            match *step {
                ScriptStep::Op(operation) => {
                    result.record(run.apply(operation));
                }
                ScriptStep::Repeat { predicate, action } => {
                    let mut applied = Vec::new();
                    let outcome = run.repeat(
                        |r| predicate.holds(r.is_obstacle(predicate.direction)),
                        |r| applied.push(r.apply(action)),
                    );
                    for accepted in applied {
                        result.record(accepted);
                    }
                    result.repeat_iterations.push(outcome.iterations);
                }
            }
        }

        tracing::debug!(
            executed = result.commands_executed,
            dropped = result.commands_dropped,
            "Script finished"
        );
        result
    }
}

/// Result of executing a script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub commands_executed: usize,
    /// Commands ignored because energy was spent
    pub commands_dropped: usize,
    /// Iterations run by each `repeat` step, in script order
    pub repeat_iterations: Vec<usize>,
}

impl ExecutionResult {
    fn record(&mut self, accepted: bool) {
        if accepted {
            self.commands_executed += 1;
        } else {
            self.commands_dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::script::parse_script;
    use crate::core::types::GridPos;
    use crate::world::loader::{EntityConfig, MapConfig};

    fn open_field(energy: i32) -> SimulationRun {
        MapConfig::new("open", energy)
            .with_entity(EntityConfig::player_at(3, 3))
            .start_run()
            .unwrap()
    }

    #[test]
    fn test_execute_moves() {
        let mut run = open_field(5);
        let script = parse_script("right; up").unwrap();
        let result = CommandExecutor::execute(&mut run, &script);
        assert_eq!(result.commands_executed, 2);
        assert_eq!(result.commands_dropped, 0);
        assert_eq!(run.world().player_position(), GridPos::new(4, 4));
    }

    #[test]
    fn test_drops_counted_after_exhaustion() {
        let mut run = open_field(1);
        let script = parse_script("right\nright\nstay").unwrap();
        let result = CommandExecutor::execute(&mut run, &script);
        assert_eq!(result.commands_executed, 1);
        assert_eq!(result.commands_dropped, 2);
    }

    #[test]
    fn test_repeat_walks_to_wall() {
        let mut run = MapConfig::new("wall", 10)
            .with_entity(EntityConfig::player_at(1, 1))
            .with_entity(EntityConfig::box_at(4, 1))
            .start_run()
            .unwrap();
        let script = parse_script("repeat !obstacle-right right").unwrap();
        let result = CommandExecutor::execute(&mut run, &script);
        assert_eq!(result.repeat_iterations, vec![2]);
        assert_eq!(run.world().player_position(), GridPos::new(3, 1));
    }

    #[test]
    fn test_repeat_capped_at_ten() {
        let mut run = open_field(20);
        let script = parse_script("repeat !obstacle-up stay").unwrap();
        let result = CommandExecutor::execute(&mut run, &script);
        assert_eq!(result.repeat_iterations, vec![10]);
        assert_eq!(result.commands_executed, 10);
    }
}
