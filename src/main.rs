//! Piston Grid - Entry Point
//!
//! Loads a map, runs a command script against it and prints the simulate
//! result as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use piston_grid::command::{parse_script, CommandExecutor, Script};
use piston_grid::core::error::Result;
use piston_grid::world::loader::MapConfig;
use piston_grid::world::presets;

/// Run a command script on a piston grid map
#[derive(Parser, Debug)]
#[command(name = "piston-grid")]
#[command(about = "Simulate a command script and print the move plan as JSON")]
struct Args {
    /// Built-in map preset (map1, map2, map3)
    #[arg(long, default_value = "map1", conflicts_with = "map_file")]
    map: String,

    /// Map file (TOML, or JSON with a .json extension)
    #[arg(long)]
    map_file: Option<PathBuf>,

    /// Script file, one command per line
    #[arg(long, conflicts_with = "commands")]
    script: Option<PathBuf>,

    /// Inline commands separated by `;`
    #[arg(long)]
    commands: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("piston_grid=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&args) {
        tracing::error!(error = %err, "Run failed");
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let map = match &args.map_file {
        Some(path) => MapConfig::load_from_file(path)?,
        None => presets::by_name(&args.map)?,
    };

    let script = load_script(args)?;
    let mut simulation = map.start_run()?;
    let outcome = CommandExecutor::execute(&mut simulation, &script);

    tracing::info!(
        map = %map.name,
        executed = outcome.commands_executed,
        dropped = outcome.commands_dropped,
        reached_goal = simulation.reached_goal(),
        "Simulation complete"
    );

    let result = simulation.into_result();
    let json = if args.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    println!("{}", json);
    Ok(())
}

fn load_script(args: &Args) -> Result<Script> {
    if let Some(path) = &args.script {
        let source = std::fs::read_to_string(path)?;
        return parse_script(&source);
    }
    match &args.commands {
        Some(commands) => parse_script(commands),
        None => Ok(Script::default()),
    }
}
