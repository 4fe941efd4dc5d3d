//! State-space search over adjacent-swap sorting puzzles.
//!
//! A puzzle is an arbitrary sequence of ordered values and its goal is the
//! ascending sort. The crate provides breadth-first, depth-first,
//! uniform-cost, greedy best-first, A* and hill-climbing strategies over one
//! shared state model, successor generator and heuristic library.

pub mod error;
pub mod experiment;
pub mod frontier;
pub mod heuristics;
pub mod path;
pub mod report;
pub mod solver;
pub mod state;
pub mod successors;

// Re-export main types
pub use error::{ExperimentError, InputError, Result, SearchError};
pub use experiment::{format_experiment, run_experiment, ExperimentConfig, ExperimentReport, Trial};
pub use heuristics::{absolute_difference, inversions, misplaced_from_start, misplaced_tiles};
pub use report::{format_hill_climb, format_path, format_report, format_visited, StrategyReport};
pub use solver::{
    new_search, HillClimb, Outcome, SearchConfig, SearchEngine, SearchStats, Solution, Strategy,
};
pub use state::{parse_numbers, Element, Number, State};
pub use successors::successors;
