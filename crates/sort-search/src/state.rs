//! Search state and value types.
//!
//! A [`State`] is an ordered sequence of values. States are never changed in
//! place; every transition produces a new state. Equality and hashing are by
//! value, so two states with the same sequence are the same search node.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::InputError;

/// Number of values a state holds inline before spilling to the heap.
const INLINE_LEN: usize = 8;

/// A value that can be placed in a [`State`].
///
/// Values must be totally ordered (the goal is the ascending sort) and
/// hashable (visited-set identity). `distance` feeds the absolute-difference
/// heuristic.
pub trait Element: Copy + Ord + Hash + fmt::Debug + fmt::Display {
    /// Absolute difference between two values.
    fn distance(self, other: Self) -> f64;
}

macro_rules! impl_element_for_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn distance(self, other: Self) -> f64 {
                    self.abs_diff(other) as f64
                }
            }
        )*
    };
}

impl_element_for_int!(i32, i64, u32, u64, usize);

/// A finite floating point value with a total order.
///
/// NaN and infinities are rejected on construction and `-0.0` is stored as
/// `0.0`, so bitwise equality agrees with numeric equality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Number(f64);

impl Number {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Number {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(InputError::NotFinite(value));
        }
        // -0.0 == 0.0 numerically but not bitwise
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl FromStr for Number {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidNumber(s.to_string()))?;
        Self::try_from(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Element for Number {
    fn distance(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

/// Parse whitespace-separated tokens into numbers.
///
/// Returns [`InputError::Empty`] when there are no tokens.
pub fn parse_numbers(input: &str) -> Result<Vec<Number>, InputError> {
    let numbers = input
        .split_whitespace()
        .map(Number::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if numbers.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(numbers)
}

/// One configuration of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State<T> {
    values: SmallVec<[T; INLINE_LEN]>,
}

impl<T: Element> State<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The ascending sort of this state's values.
    pub fn sorted(&self) -> Self {
        let mut values = self.values.clone();
        values.sort();
        Self { values }
    }

    /// Check whether the values are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Clone with the values at `index` and `index + 1` exchanged.
    ///
    /// `index + 1` must be in bounds.
    pub fn swapped(&self, index: usize) -> Self {
        let mut values = self.values.clone();
        values.swap(index, index + 1);
        Self { values }
    }
}

impl<T: Element> From<Vec<T>> for State<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Element> fmt::Display for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sorted_goal() {
        let state = State::new(vec![3, 1, 2]);
        assert_eq!(state.sorted().values(), &[1, 2, 3]);
        assert!(!state.is_sorted());
        assert!(state.sorted().is_sorted());
        // Original is untouched
        assert_eq!(state.values(), &[3, 1, 2]);
    }

    #[test]
    fn test_trivial_states_are_sorted() {
        let empty: State<i32> = State::new(vec![]);
        assert!(empty.is_empty());
        assert!(empty.is_sorted());
        assert_eq!(empty.sorted(), empty);

        let single = State::new(vec![5]);
        assert_eq!(single.len(), 1);
        assert!(single.is_sorted());
    }

    #[test]
    fn test_value_identity() {
        let a = State::new(vec![2, 1, 3]);
        let b = State::from(vec![2, 1, 3]);
        let c = State::new(vec![1, 2, 3]);

        let mut seen = HashSet::new();
        assert!(seen.insert(a.clone()));
        assert!(!seen.insert(b));
        assert!(seen.insert(c));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_swapped_is_copy_on_transform() {
        let state = State::new(vec![1, 2, 3]);
        let next = state.swapped(1);
        assert_eq!(next.values(), &[1, 3, 2]);
        assert_eq!(state.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let state = State::new((0..20).rev());
        assert_eq!(state.len(), 20);
        assert_eq!(state.sorted().values()[19], 19);
    }

    #[test]
    fn test_display_as_tuple() {
        let state = State::new(vec![3, 1, 2]);
        assert_eq!(state.to_string(), "(3, 1, 2)");
        let numbers = State::new(vec![Number::from(1), Number::try_from(2.5).unwrap()]);
        assert_eq!(numbers.to_string(), "(1, 2.5)");
    }

    #[test]
    fn test_number_rejects_non_finite() {
        assert!(matches!(
            Number::try_from(f64::NAN),
            Err(InputError::NotFinite(_))
        ));
        assert_eq!(
            Number::try_from(f64::INFINITY),
            Err(InputError::NotFinite(f64::INFINITY))
        );
        assert!(matches!("inf".parse::<Number>(), Err(InputError::NotFinite(_))));
    }

    #[test]
    fn test_number_negative_zero_equals_zero() {
        let neg = Number::try_from(-0.0).unwrap();
        let pos = Number::try_from(0.0).unwrap();
        assert_eq!(neg, pos);

        let mut seen = HashSet::new();
        seen.insert(neg);
        assert!(seen.contains(&pos));
    }

    #[test]
    fn test_number_ordering_and_distance() {
        let a: Number = "-1.5".parse().unwrap();
        let b: Number = "2".parse().unwrap();
        assert!(a < b);
        assert_eq!(a.distance(b), 3.5);
        assert_eq!(7u32.distance(10), 3.0);
        assert_eq!((-4i64).distance(4), 8.0);
    }

    #[test]
    fn test_parse_numbers() {
        let numbers = parse_numbers(" 3 1.25\t-2 \n").unwrap();
        assert_eq!(numbers.len(), 3);
        assert_eq!(numbers[1].get(), 1.25);

        assert_eq!(parse_numbers("   "), Err(InputError::Empty));
        assert_eq!(
            parse_numbers("1 two 3"),
            Err(InputError::InvalidNumber("two".to_string()))
        );
    }

    #[test]
    fn test_state_serializes_as_sequence() {
        let state = State::new(vec![Number::from(2), Number::try_from(0.5).unwrap()]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "[2.0,0.5]");

        let back: State<Number> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(serde_json::from_str::<Number>("1e999").is_err());
    }
}
