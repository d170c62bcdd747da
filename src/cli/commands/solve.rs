//! Solve command - find a winning move for one position

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    game::ChompState,
    solver::{self, Evaluation, EvaluationCache},
};

/// Evaluation strategy used to solve a position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Strategy {
    /// Memoized recursion from the requested position
    TopDown,
    /// Full enumeration followed by backward induction
    BottomUp,
}

impl Strategy {
    /// Run this strategy's evaluator. Both strategies return identical
    /// results for identical inputs.
    pub fn evaluate(self, state: &ChompState, cache: &mut EvaluationCache) -> Evaluation {
        match self {
            Strategy::TopDown => solver::top_down::evaluate(state, cache),
            Strategy::BottomUp => solver::bottom_up::evaluate(state, cache),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Find a winning move for a Chomp position")]
pub struct SolveArgs {
    /// Column heights, left to right
    #[arg(required = true, num_args = 1..)]
    pub heights: Vec<usize>,

    /// Evaluation strategy
    #[arg(long, value_enum, default_value = "top-down")]
    pub strategy: Strategy,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let state = ChompState::from_heights(&args.heights);
    let mut cache = EvaluationCache::new();

    println!("{}", render(args.strategy.evaluate(&state, &mut cache)));

    Ok(())
}

/// Render an evaluation the way the solver reports results: a winning move
/// names its square, a lost position concedes, a finished game needs no move.
pub fn render(evaluation: Evaluation) -> String {
    match evaluation {
        Evaluation::Terminal => "already won".to_string(),
        Evaluation::NoWinningMove => "give up".to_string(),
        Evaluation::Winning(mv) => format!("eat column {} row {}", mv.col, mv.row),
    }
}
