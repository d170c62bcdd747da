//! Win/loss analysis for the combinatorial game Chomp
//!
//! This crate provides:
//! - An immutable board-state model with the Chomp move rule
//! - Two behaviorally-equivalent evaluators: memoized top-down recursion and
//!   bottom-up backward induction over the enumerated state space
//! - A CLI for solving single positions and summarizing whole state spaces

pub mod cli;
pub mod error;
pub mod game;
pub mod solver;

pub use error::{Error, Result};
pub use game::{ChompState, Move, collect_reachable};
pub use solver::{Evaluation, EvaluationCache};
