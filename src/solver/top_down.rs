//! Memoized top-down evaluation

use crate::{
    game::ChompState,
    solver::{Evaluation, EvaluationCache},
};

/// Evaluate `state` for the player to move, memoizing every resolved
/// position in `cache`.
///
/// Candidates are scanned in the canonical order from
/// [`ChompState::moves`]; the first whose child evaluates to
/// [`Evaluation::NoWinningMove`] is this state's winning move. The
/// reachability relation is a DAG, so memoizing bounds the work to one
/// expansion per distinct state even though many move sequences reach the
/// same board. Recursion depth is bounded by the remaining-square count.
pub fn evaluate(state: &ChompState, cache: &mut EvaluationCache) -> Evaluation {
    if state.is_terminal() {
        return Evaluation::Terminal;
    }
    if let Some(known) = cache.get(state) {
        return known;
    }

    let mut evaluation = Evaluation::NoWinningMove;
    for mv in state.moves() {
        let child = state.next(mv);
        if evaluate(&child, cache) == Evaluation::NoWinningMove {
            evaluation = Evaluation::Winning(mv);
            break;
        }
    }

    cache.record(state.clone(), evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;

    fn solve(heights: &[usize]) -> Evaluation {
        let mut cache = EvaluationCache::new();
        evaluate(&ChompState::from_heights(heights), &mut cache)
    }

    #[test]
    fn test_terminal_board_needs_no_move() {
        assert_eq!(solve(&[0, 0]), Evaluation::Terminal);
    }

    #[test]
    fn test_single_square_is_lost() {
        // The only move is forced and eats the last square.
        assert_eq!(solve(&[1]), Evaluation::NoWinningMove);
    }

    #[test]
    fn test_two_single_columns_win_by_eating_the_second() {
        assert_eq!(
            solve(&[1, 1]),
            Evaluation::Winning(Move { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_square_board_wins_by_eating_one_one() {
        assert_eq!(
            solve(&[2, 2]),
            Evaluation::Winning(Move { row: 1, col: 1 })
        );
        assert_eq!(
            solve(&[3, 3, 3]),
            Evaluation::Winning(Move { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_symmetric_l_shape_is_lost() {
        assert_eq!(solve(&[2, 1]), Evaluation::NoWinningMove);
        assert_eq!(solve(&[3, 1, 1]), Evaluation::NoWinningMove);
    }

    #[test]
    fn test_warm_cache_returns_without_new_work() {
        let state = ChompState::initial(3, 4);
        let mut cache = EvaluationCache::new();

        let first = evaluate(&state, &mut cache);
        let resolved = cache.len();

        let second = evaluate(&state, &mut cache);
        assert_eq!(first, second);
        // A cache hit adds no entries for already-resolved states.
        assert_eq!(cache.len(), resolved);
    }
}
