//! Command scripts
//!
//! Parses the line-oriented script language and runs it against a
//! [`SimulationRun`](crate::simulation::SimulationRun):
//! source -> parse_script -> Script -> CommandExecutor -> ExecutionResult

pub mod executor;
pub mod script;

pub use executor::{CommandExecutor, ExecutionResult};
pub use script::{parse_script, Predicate, Script, ScriptStep};
