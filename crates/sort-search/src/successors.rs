//! Successor generation by adjacent swaps.

use crate::state::{Element, State};

/// All states one adjacent swap away from `state`.
///
/// A state of length N yields exactly N−1 successors, ordered by the swapped
/// index. When the two swapped values are equal the successor equals `state`
/// itself; callers rely on the visited set to discard it.
pub fn successors<T: Element>(state: &State<T>) -> Vec<State<T>> {
    (0..state.len().saturating_sub(1))
        .map(|index| state.swapped(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successors_in_swap_order() {
        let state = State::new(vec![3, 1, 2]);
        let next = successors(&state);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].values(), &[1, 3, 2]);
        assert_eq!(next[1].values(), &[3, 2, 1]);
    }

    #[test]
    fn test_successor_count_is_len_minus_one() {
        for n in 0..10usize {
            let state = State::new((0..n).rev());
            let expected = n.saturating_sub(1);
            assert_eq!(successors(&state).len(), expected, "length {n}");
        }
    }

    #[test]
    fn test_distinct_values_never_yield_parent() {
        let state = State::new(vec![4, 2, 9, 1]);
        for successor in successors(&state) {
            assert_ne!(successor, state);
            let differing = successor
                .values()
                .iter()
                .zip(state.values())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2);
        }
    }

    #[test]
    fn test_equal_neighbours_yield_parent() {
        // Swapping the two 1s is a no-op transition
        let state = State::new(vec![1, 1, 2]);
        let next = successors(&state);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0], state);
        assert_eq!(next[1].values(), &[1, 2, 1]);
    }

    #[test]
    fn test_successors_do_not_mutate_input() {
        let state = State::new(vec![2, 1]);
        let _ = successors(&state);
        assert_eq!(state.values(), &[2, 1]);
    }
}
