//! Bottom-up evaluation by backward induction

use crate::{
    game::{ChompState, collect_reachable},
    solver::{Evaluation, EvaluationCache},
};

/// Evaluate `state` by enumerating its reachable set and solving every
/// member in ascending remaining-square order.
///
/// Every move strictly decreases the remaining-square count, so that order
/// is topological: each candidate child is already resolved when its parent
/// comes up, and the empty board seeds the induction with
/// [`Evaluation::Terminal`] instead of a recursive base case. States
/// already present in `cache` keep their recorded value, so re-running over
/// a warm cache is idempotent.
pub fn evaluate(state: &ChompState, cache: &mut EvaluationCache) -> Evaluation {
    let mut pending: Vec<ChompState> = collect_reachable(state).into_iter().collect();
    // Ties hold equal square counts and cannot reach one another in one
    // move; the secondary state order only pins down the traversal.
    pending.sort_unstable_by(|a, b| a.remaining().cmp(&b.remaining()).then_with(|| a.cmp(b)));

    for current in pending {
        if cache.contains(&current) {
            continue;
        }
        let evaluation = if current.is_terminal() {
            Evaluation::Terminal
        } else {
            induct(&current, cache)
        };
        cache.record(current, evaluation);
    }

    cache
        .get(state)
        .expect("reachable set always contains the requested state")
}

/// One induction step: the first candidate whose resolved child is a lost
/// position becomes the winning move.
fn induct(state: &ChompState, cache: &EvaluationCache) -> Evaluation {
    for mv in state.moves() {
        let child = state.next(mv);
        let child_evaluation = cache
            .get(&child)
            .expect("children sort before their parents");
        if child_evaluation == Evaluation::NoWinningMove {
            return Evaluation::Winning(mv);
        }
    }
    Evaluation::NoWinningMove
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game::Move, solver::top_down};

    fn solve(heights: &[usize]) -> Evaluation {
        let mut cache = EvaluationCache::new();
        evaluate(&ChompState::from_heights(heights), &mut cache)
    }

    #[test]
    fn test_terminal_board_needs_no_move() {
        assert_eq!(solve(&[0, 0, 0]), Evaluation::Terminal);
    }

    #[test]
    fn test_single_square_is_lost() {
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
            solve(&[3, 3, 3]),
            Evaluation::Winning(Move { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_cache_holds_the_full_reachable_table() {
        let state = ChompState::initial(2, 2);
        let mut cache = EvaluationCache::new();
        evaluate(&state, &mut cache);
        // All six staircase boards of the 2x2 pan are resolved.
        assert_eq!(cache.len(), 6);
        assert_eq!(
            cache.get(&ChompState::from_heights(&[0, 0])),
            Some(Evaluation::Terminal)
        );
        assert_eq!(
            cache.get(&ChompState::from_heights(&[2, 1])),
            Some(Evaluation::NoWinningMove)
        );
    }

    #[test]
    fn test_warm_cache_is_left_untouched() {
        let state = ChompState::initial(2, 3);
        let mut cache = EvaluationCache::new();
        let first = evaluate(&state, &mut cache);
        let resolved = cache.len();

        let second = evaluate(&state, &mut cache);
        assert_eq!(first, second);
        assert_eq!(cache.len(), resolved);
    }

    #[test]
    fn test_matches_top_down_on_a_shared_board() {
        let state = ChompState::from_heights(&[4, 2, 1]);
        let mut bottom_cache = EvaluationCache::new();
        let mut top_cache = EvaluationCache::new();
        assert_eq!(
            evaluate(&state, &mut bottom_cache),
            top_down::evaluate(&state, &mut top_cache)
        );
    }
}
