//! Game evaluation: two strategies sharing one result contract

pub mod bottom_up;
pub mod memo;
pub mod top_down;

pub use memo::EvaluationCache;

use serde::{Deserialize, Serialize};

use crate::game::Move;

/// Outcome of evaluating a position for the player to move.
///
/// The three cases are mutually exclusive. `NoWinningMove` is a valid
/// result, not an error, and is never conflated with a literal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// No squares remain; the game is already over.
    Terminal,
    /// Every move leaves the opponent a won position.
    NoWinningMove,
    /// Eating this square forces a win.
    Winning(Move),
}

impl Evaluation {
    /// The winning move, if this evaluation carries one.
    pub fn winning_move(self) -> Option<Move> {
        match self {
            Evaluation::Winning(mv) => Some(mv),
            _ => None,
        }
    }
}
