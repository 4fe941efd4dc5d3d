//! Error types for the search engine and its input boundary.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Ways a single search invocation can end without a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier emptied before the goal was popped.
    #[error("frontier exhausted after expanding {expanded} states without reaching the goal")]
    Exhausted { expanded: usize },

    /// The caller-imposed expansion cap was hit first.
    #[error("expansion limit of {limit} reached before the goal")]
    LimitReached { limit: usize },
}

/// Malformed values rejected before an engine is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Token could not be parsed as a number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// NaN or an infinity.
    #[error("value must be finite, got {0}")]
    NotFinite(f64),

    /// The input source could not be read.
    #[error("failed to read input: {0}")]
    Read(String),

    /// No values were supplied.
    #[error("no values supplied")]
    Empty,

    /// Strategy name not recognised.
    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
}

/// Ways an experiment run can stop before every trial completes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExperimentError {
    /// Bounds that cannot be sampled uniformly: inverted, non-finite, or so
    /// far apart that their span overflows.
    #[error("cannot sample values from [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
