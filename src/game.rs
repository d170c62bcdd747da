//! Chomp game implementation

pub mod graph;
pub mod state;

pub use graph::collect_reachable;
pub use state::{ChompState, Move};
