//! Write-once evaluation cache keyed by board state

use std::collections::HashMap;

use crate::{game::ChompState, solver::Evaluation};

/// Cache of evaluation results keyed by state.
///
/// Entries are write-once: a state's evaluation is immutable once recorded,
/// and [`record`](Self::record) keeps the first value on a repeated insert.
/// Access is single-threaded; the insert-if-absent contract is what a later
/// parallel compute-if-absent would need, but no such mode exists.
#[derive(Debug, Default)]
pub struct EvaluationCache {
    entries: HashMap<ChompState, Evaluation>,
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the recorded evaluation for `state`.
    pub fn get(&self, state: &ChompState) -> Option<Evaluation> {
        self.entries.get(state).copied()
    }

    /// Whether `state` has been resolved already.
    pub fn contains(&self, state: &ChompState) -> bool {
        self.entries.contains_key(state)
    }

    /// Record an evaluation for `state`, keeping any existing entry.
    /// Returns the evaluation actually stored.
    pub fn record(&mut self, state: ChompState, evaluation: Evaluation) -> Evaluation {
        *self.entries.entry(state).or_insert(evaluation)
    }

    /// Number of resolved states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The resolved states, in unspecified order.
    pub fn states(&self) -> impl Iterator<Item = &ChompState> {
        self.entries.keys()
    }

    /// Traverse every (state, evaluation) entry.
    pub fn iter(&self) -> impl Iterator<Item = (&ChompState, Evaluation)> {
        self.entries
            .iter()
            .map(|(state, &evaluation)| (state, evaluation))
    }
}
