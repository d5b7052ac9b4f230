//! CLI entry point for the rope timer.
//!
//! Usage:
//!   burning-ropes solve [options]
//!   burning-ropes compare [options]
//!
//! Options:
//!   --ropes <n>             Number of ropes (default: 3)
//!   --burn-time <minutes>   Time for one rope to burn end to end (default: 60)
//!   --strategy <name>       breadth-first or depth-first (solve only)
//!   --time <minutes>        Only print the schedule for this duration (solve only)
//!   --json                  Print JSON instead of text (solve only)
//!
//! Set RUST_LOG=debug to see search statistics on stderr.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use burning_ropes::format::{describe, summary};
use burning_ropes::{
    verify_schedule, BreadthFirstSolver, DepthFirstSolver, Minutes, RopeInstruction, RopeSolver,
    SearchStats, SolverConfig, Strategy, Timetable,
};

/// Beyond this many ropes the search grows slow enough to mention
const LARGE_ROPE_COUNT: usize = 6;

#[derive(Parser)]
#[command(name = "burning-ropes")]
#[command(about = "Find every duration measurable by burning ropes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every measurable duration with a lighting schedule for each
    Solve {
        #[command(flatten)]
        ropes: RopeArgs,

        /// Search strategy
        #[arg(long, value_enum, default_value_t = Strategy::BreadthFirst)]
        strategy: Strategy,

        /// Only print the schedule for this duration
        #[arg(long)]
        time: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run both strategies and compare rope counts per duration
    Compare {
        #[command(flatten)]
        ropes: RopeArgs,
    },
}

#[derive(clap::Args)]
struct RopeArgs {
    /// Number of ropes
    #[arg(long, default_value = "3")]
    ropes: usize,

    /// Time for one rope to burn end to end
    #[arg(long, default_value = "60")]
    burn_time: f64,
}

impl RopeArgs {
    fn config(&self) -> Result<SolverConfig> {
        let config = SolverConfig::new(self.ropes, self.burn_time);
        config.validate().context("invalid rope configuration")?;
        if config.num_ropes > LARGE_ROPE_COUNT {
            warn!(
                num_ropes = config.num_ropes,
                "search space grows combinatorially with rope count, this may take a while"
            );
        }
        Ok(config)
    }
}

/// JSON output for a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    config: SolverConfig,
    strategy: Strategy,
    stats: SearchStats,
    times: Vec<TimeOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeOutput {
    time: Minutes,
    ropes: usize,
    instructions: Vec<RopeInstruction>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            ropes,
            strategy,
            time,
            json,
        } => solve(ropes.config()?, strategy, time.map(Minutes), json),
        Commands::Compare { ropes } => compare(ropes.config()?),
    }
}

fn solve(config: SolverConfig, strategy: Strategy, only: Option<Minutes>, json: bool) -> Result<()> {
    info!(
        num_ropes = config.num_ropes,
        burn_time = config.burn_time,
        strategy = strategy.name(),
        "solving"
    );
    let (mut timetable, stats) = strategy.solver(config.clone()).solve_with_stats();

    if let Some(time) = only {
        match timetable.remove(&time) {
            Some(instructions) => {
                timetable = Timetable::from([(time, instructions)]);
            }
            None => bail!(
                "{} minutes cannot be measured with {} ropes of {} minutes",
                time,
                config.num_ropes,
                Minutes(config.burn_time)
            ),
        }
    }

    for (time, instructions) in &timetable {
        if !verify_schedule(*time, instructions, config.burn_time) {
            warn!(time = time.value(), "schedule failed replay");
        }
    }

    if json {
        let output = SolveOutput {
            config,
            strategy,
            stats,
            times: timetable
                .into_iter()
                .map(|(time, instructions)| TimeOutput {
                    time,
                    ropes: instructions.len(),
                    instructions,
                })
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("serializing solve output")?
        );
        return Ok(());
    }

    for (time, instructions) in &timetable {
        for line in describe(*time, instructions) {
            println!("{}", line);
        }
        println!();
    }

    if only.is_none() {
        println!("{}", summary(&timetable, &config));
    }

    Ok(())
}

fn compare(config: SolverConfig) -> Result<()> {
    let (bfs, bfs_stats) = BreadthFirstSolver::new(config.clone()).solve_with_stats();
    let (dfs, dfs_stats) = DepthFirstSolver::new(config.clone()).solve_with_stats();
    info!(
        bfs_states = bfs_stats.states_expanded,
        dfs_states = dfs_stats.states_expanded,
        "compared"
    );

    println!("{:>10} {:>14} {:>12}", "time", "breadth-first", "depth-first");

    let mut longer = 0;
    for (time, instructions) in &bfs {
        let dfs_len = dfs.get(time).map(Vec::len);
        let marker = match dfs_len {
            Some(len) if len > instructions.len() => {
                longer += 1;
                " *"
            }
            Some(_) => "",
            None => " (missing)",
        };
        let dfs_text = dfs_len.map_or_else(|| "-".to_string(), |len| len.to_string());
        println!(
            "{:>10} {:>14} {:>12}{}",
            time.to_string(),
            instructions.len(),
            dfs_text,
            marker
        );
    }

    println!();
    println!(
        "{} times, depth-first uses more ropes for {} of them",
        bfs.len(),
        longer
    );

    Ok(())
}
