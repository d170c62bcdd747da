//! Analyze command - solve an entire reachable state space
//!
//! Enumerates every position reachable from a starting board, solves the
//! whole table by backward induction, and summarizes the result.

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{commands::solve::render, output},
    game::ChompState,
    solver::{Evaluation, EvaluationCache, bottom_up},
};

#[derive(Parser, Debug)]
#[command(about = "Solve every position reachable from a starting board")]
pub struct AnalyzeArgs {
    /// Column heights, left to right
    #[arg(required = true, num_args = 1..)]
    pub heights: Vec<usize>,

    /// Export the solved table to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct SolvedTableExport {
    description: &'static str,
    initial: ChompState,
    total_states: usize,
    won: usize,
    lost: usize,
    table: BTreeMap<String, Evaluation>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let state = ChompState::from_heights(&args.heights);

    let spinner = output::create_spinner("Solving reachable state space...");
    let mut cache = EvaluationCache::new();
    let verdict = bottom_up::evaluate(&state, &mut cache);
    spinner.finish_and_clear();

    let mut won = 0;
    let mut lost = 0;
    for (_, evaluation) in cache.iter() {
        match evaluation {
            Evaluation::Winning(_) => won += 1,
            Evaluation::NoWinningMove => lost += 1,
            Evaluation::Terminal => {}
        }
    }

    output::print_section(&format!("Chomp analysis for [{state}]"));
    output::print_kv("Reachable states", &output::format_number(cache.len()));
    output::print_kv("Won positions", &output::format_number(won));
    output::print_kv("Lost positions", &output::format_number(lost));
    output::print_kv("Verdict", &render(verdict));

    if let Some(path) = args.export {
        export_table(&state, &cache, won, lost, &path)?;
        println!("\nSolved table exported to: {}", path.display());
    }

    Ok(())
}

/// Export the full solved table as JSON, keyed by height list.
fn export_table(
    initial: &ChompState,
    cache: &EvaluationCache,
    won: usize,
    lost: usize,
    path: &PathBuf,
) -> crate::Result<()> {
    let mut table = BTreeMap::new();
    for (state, evaluation) in cache.iter() {
        table.insert(state.to_string(), evaluation);
    }

    let export = SolvedTableExport {
        description: "Backward-induction table for all reachable Chomp positions",
        initial: initial.clone(),
        total_states: cache.len(),
        won,
        lost,
        table,
    };

    let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(file, &export)?;

    Ok(())
}
