//! Chomp CLI - win/loss analysis for Chomp positions
//!
//! This CLI provides a unified interface for:
//! - Solving a single position for a winning move
//! - Solving and summarizing an entire reachable state space

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chomp")]
#[command(version, about = "Win/loss analysis for the combinatorial game Chomp", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a winning move for one position
    Solve(chomp::cli::commands::solve::SolveArgs),

    /// Solve and summarize an entire reachable state space
    Analyze(chomp::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => chomp::cli::commands::solve::execute(args),
        Commands::Analyze(args) => chomp::cli::commands::analyze::execute(args),
    }
}
