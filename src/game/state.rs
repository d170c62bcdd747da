//! Board state representation and move application

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// A move in Chomp: the square to eat, with (0, 0) the bottom-left square.
///
/// Eating a square removes it together with every square in the same or a
/// higher row of the same or a farther-right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

/// A Chomp board: the number of squares remaining in each column, left to
/// right. The width includes any empty columns.
///
/// States are immutable value objects; applying a move never changes its
/// input, it produces a new state. Comparison, equality, and hashing all
/// view a missing column as height 0, so trailing empty columns are neutral
/// and states work as cache keys regardless of their origin width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChompState {
    heights: Vec<usize>,
}

/// Multiplier for the rolling hash over the height sequence.
const HASH_BASE: u64 = 31;

impl ChompState {
    /// Create the initial state with a full rectangular pan.
    pub fn initial(rows: usize, cols: usize) -> Self {
        ChompState {
            heights: vec![rows; cols],
        }
    }

    /// Create a state with the given number of squares remaining per column.
    /// The caller keeps ownership of the slice; the state stores its own copy.
    pub fn from_heights(heights: &[usize]) -> Self {
        ChompState {
            heights: heights.to_vec(),
        }
    }

    /// Width of the pan, including empty columns.
    pub fn width(&self) -> usize {
        self.heights.len()
    }

    /// Squares remaining in the given column. Callers must keep `col` below
    /// `width()`.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Total squares remaining on the board.
    pub fn remaining(&self) -> usize {
        self.heights.iter().sum()
    }

    /// A state is terminal when no squares remain.
    pub fn is_terminal(&self) -> bool {
        self.heights.iter().all(|&h| h == 0)
    }

    /// Apply a move: every column at or right of `mv.col` that is taller
    /// than `mv.row` is cut down to `mv.row`; shorter columns have nothing
    /// to remove and are unchanged, as is everything left of `mv.col`.
    ///
    /// Evaluators only construct in-range moves, so `mv` is trusted here.
    #[must_use = "next returns a new state; the original is unchanged"]
    pub fn next(&self, mv: Move) -> ChompState {
        let heights = self
            .heights
            .iter()
            .enumerate()
            .map(|(col, &h)| if col < mv.col || h < mv.row { h } else { mv.row })
            .collect();
        ChompState { heights }
    }

    /// Candidate moves in the canonical order shared by every evaluator:
    /// ascending column, then ascending row within the column.
    ///
    /// The two evaluation strategies are only required to report the same
    /// first-found winning move because both scan candidates through this
    /// one iterator.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.heights
            .iter()
            .enumerate()
            .flat_map(|(col, &h)| (0..h).map(move |row| Move { row, col }))
    }

    /// Number of columns that still hold squares, i.e. the heights that
    /// participate in comparison and hashing.
    fn significant_width(&self) -> usize {
        self.heights
            .iter()
            .rposition(|&h| h > 0)
            .map_or(0, |col| col + 1)
    }
}

impl Ord for ChompState {
    /// Compare columns left to right; the first differing height decides.
    /// A sequence that runs out early continues with implicit zero heights.
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.heights.len().max(other.heights.len());
        for col in 0..width {
            let a = self.heights.get(col).copied().unwrap_or(0);
            let b = other.heights.get(col).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for ChompState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ChompState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ChompState {}

impl Hash for ChompState {
    /// Order-sensitive rolling hash over the heights. Trailing empty
    /// columns are skipped so hashing agrees with the zero-padded equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut acc: u64 = 0;
        for &h in &self.heights[..self.significant_width()] {
            acc = acc.wrapping_mul(HASH_BASE).wrapping_add(h as u64);
        }
        state.write_u64(acc);
    }
}

impl FromStr for ChompState {
    type Err = crate::Error;

    /// Parse a whitespace- or comma-separated list of column heights.
    ///
    /// # Errors
    ///
    /// Returns an error if the input holds no heights at all, or if any
    /// token is not a non-negative integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(crate::Error::EmptyBoard);
        }

        let mut heights = Vec::with_capacity(tokens.len());
        for token in tokens {
            let height = token
                .parse::<usize>()
                .map_err(|_| crate::Error::InvalidHeight {
                    token: token.to_string(),
                    input: s.to_string(),
                })?;
            heights.push(height);
        }

        Ok(ChompState { heights })
    }
}

impl fmt::Display for ChompState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (col, h) in self.heights.iter().enumerate() {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{h}")?;
        }
        Ok(())
    }
}
