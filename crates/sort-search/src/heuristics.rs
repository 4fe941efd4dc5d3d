//! Heuristic and cost functions over states.
//!
//! All four functions are pure. The reference state (goal or initial) is
//! passed explicitly and is expected to have the same length as `state`.

use crate::state::{Element, State};

/// Number of index pairs `i < j` with `state[i] > state[j]`.
///
/// Zero exactly when the state is sorted. Drives hill climbing.
pub fn inversions<T: Element>(state: &State<T>) -> usize {
    let values = state.values();
    let mut count = 0;
    for (i, a) in values.iter().enumerate() {
        for b in &values[i + 1..] {
            if a > b {
                count += 1;
            }
        }
    }
    count
}

/// Number of positions where `state` and `goal` hold different values.
pub fn misplaced_tiles<T: Element>(state: &State<T>, goal: &State<T>) -> usize {
    count_differences(state, goal)
}

/// Sum of `|state[i] - goal[i]|` over all positions.
///
/// Heuristic for greedy best-first and A*.
pub fn absolute_difference<T: Element>(state: &State<T>, goal: &State<T>) -> f64 {
    state
        .values()
        .iter()
        .zip(goal.values())
        .map(|(&a, &b)| a.distance(b))
        .sum()
}

/// Number of positions where `state` differs from the *initial* state.
///
/// Used as the g term by uniform-cost and A*. It is recomputed per state from
/// the initial configuration, not accumulated along the path, so it does not
/// grow monotonically with path length. A* built on it is not guaranteed to
/// return a shortest path.
pub fn misplaced_from_start<T: Element>(state: &State<T>, initial: &State<T>) -> usize {
    count_differences(state, initial)
}

fn count_differences<T: Element>(a: &State<T>, b: &State<T>) -> usize {
    a.values()
        .iter()
        .zip(b.values())
        .filter(|(x, y)| x != y)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Number;

    #[test]
    fn test_inversions() {
        assert_eq!(inversions(&State::new(vec![1, 2, 3])), 0);
        assert_eq!(inversions(&State::new(vec![2, 1])), 1);
        assert_eq!(inversions(&State::new(vec![3, 1, 2])), 2);
        assert_eq!(inversions(&State::new(vec![4, 3, 2, 1])), 6);
        // Equal values are not inversions
        assert_eq!(inversions(&State::new(vec![1, 1, 2])), 0);
        assert_eq!(inversions(&State::<i32>::new(vec![])), 0);
    }

    #[test]
    fn test_misplaced_tiles() {
        let state = State::new(vec![3, 1, 2]);
        let goal = state.sorted();
        assert_eq!(misplaced_tiles(&state, &goal), 3);
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
        assert_eq!(misplaced_tiles(&State::new(vec![1, 3, 2]), &goal), 2);
    }

    #[test]
    fn test_absolute_difference() {
        let state = State::new(vec![3, 1, 2]);
        let goal = state.sorted();
        // |3-1| + |1-2| + |2-3|
        assert_eq!(absolute_difference(&state, &goal), 4.0);
        assert_eq!(absolute_difference(&goal, &goal), 0.0);
    }

    #[test]
    fn test_absolute_difference_fractional() {
        let state = State::new(vec![
            Number::try_from(0.5).unwrap(),
            Number::try_from(-0.25).unwrap(),
        ]);
        let goal = state.sorted();
        assert_eq!(absolute_difference(&state, &goal), 1.5);
    }

    #[test]
    fn test_misplaced_from_start_is_not_path_cost() {
        let initial = State::new(vec![1, 2, 3]);
        assert_eq!(misplaced_from_start(&initial, &initial), 0);

        let one_swap = initial.swapped(0);
        assert_eq!(misplaced_from_start(&one_swap, &initial), 2);

        // Swapping back after two moves returns to cost 0 despite the longer path
        let there_and_back = one_swap.swapped(0);
        assert_eq!(misplaced_from_start(&there_and_back, &initial), 0);
    }
}
