//! Reachable-state enumeration over the move relation

use std::collections::{HashSet, VecDeque};

use super::state::ChompState;

/// Collect every state reachable from `initial` by zero or more moves,
/// including `initial` itself.
///
/// Many move orders lead to the same intermediate board, so the move
/// relation is a DAG with heavy sharing; the visited set keeps each state
/// expanded at most once.
pub fn collect_reachable(initial: &ChompState) -> HashSet<ChompState> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(initial.clone());
    queue.push_back(initial.clone());

    while let Some(state) = queue.pop_front() {
        for mv in state.moves() {
            let next = state.next(mv);
            if visited.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_square_reaches_two_states() {
        let reachable = collect_reachable(&ChompState::initial(1, 1));
        assert_eq!(reachable.len(), 2);
        assert!(reachable.contains(&ChompState::from_heights(&[1])));
        assert!(reachable.contains(&ChompState::from_heights(&[0])));
    }

    #[test]
    fn test_two_by_two_reaches_all_staircases() {
        let reachable = collect_reachable(&ChompState::initial(2, 2));
        // Exactly the non-increasing height pairs bounded by the pan.
        let expected = [[0, 0], [1, 0], [1, 1], [2, 0], [2, 1], [2, 2]];
        assert_eq!(reachable.len(), expected.len());
        for heights in expected {
            assert!(
                reachable.contains(&ChompState::from_heights(&heights)),
                "missing [{} {}]",
                heights[0],
                heights[1]
            );
        }
    }

    #[test]
    fn test_reachable_set_is_closed_under_moves() {
        let reachable = collect_reachable(&ChompState::from_heights(&[3, 1, 2]));
        for state in &reachable {
            for mv in state.moves() {
                assert!(reachable.contains(&state.next(mv)));
            }
        }
    }

    #[test]
    fn test_terminal_board_reaches_only_itself() {
        let terminal = ChompState::from_heights(&[0, 0]);
        let reachable = collect_reachable(&terminal);
        assert_eq!(reachable.len(), 1);
        assert!(reachable.contains(&terminal));
    }
}
