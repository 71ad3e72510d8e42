#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs headless Garden Defence scenarios.

mod config_file;
mod scenario;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Arguments accepted by the scenario runner.
#[derive(Debug, Parser)]
#[command(
    name = "garden-defence",
    about = "Headless day/night garden defense scenario runner"
)]
struct Args {
    /// Number of in-game days to simulate before stopping.
    #[arg(long, default_value_t = 3)]
    days: u32,

    /// Fixed timestep the driver advances the world by, in milliseconds.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Seed shared by the wave scheduler and the world's loot rolls.
    #[arg(long, default_value_t = 0x5eed_ba5e)]
    seed: u64,

    /// Optional TOML scenario file overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Entry point for the Garden Defence command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let file = match &args.config {
        Some(path) => config_file::load(path)
            .with_context(|| format!("loading scenario file {}", path.display()))?,
        None => config_file::ScenarioFile::default(),
    };

    let outcome = scenario::run(&file, args.days, args.tick_ms, args.seed)?;

    let verdict = if outcome.house_stands {
        "the house stands"
    } else {
        "defeat"
    };
    println!(
        "day {}: {verdict} ({:.0}% health), {} nights weathered, {} chitin collected",
        outcome.final_day,
        outcome.house_ratio * 100.0,
        outcome.nights.len(),
        outcome.chitin_collected,
    );

    Ok(())
}
