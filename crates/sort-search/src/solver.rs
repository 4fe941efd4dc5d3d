//! Search engine over adjacent-swap sorting puzzles.
//!
//! Five strategies share one best-first loop and differ only in frontier
//! discipline and priority key:
//!
//! | Strategy      | Frontier      | Priority                                   |
//! |---------------|---------------|--------------------------------------------|
//! | breadth-first | FIFO          | insertion order                            |
//! | depth-first   | LIFO          | insertion order                            |
//! | uniform-cost  | min-priority  | misplaced-from-start                       |
//! | greedy        | min-priority  | absolute difference to goal                |
//! | A*            | min-priority  | absolute difference + misplaced-from-start |
//!
//! Equal A* priorities pop the state with the smaller misplaced-from-start
//! cost first. Remaining ties pop in insertion order.
//!
//! Hill climbing is a separate steepest-descent loop with no path tracking.
//!
//! The uniform-cost and A* cost term is measured against the initial state
//! rather than accumulated along the path, so neither is guaranteed to return
//! a shortest path. Breadth-first is the only strategy with that guarantee.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{InputError, Result, SearchError};
use crate::frontier::{Fifo, Frontier, Lifo, MinPriority, Priority};
use crate::heuristics::{absolute_difference, inversions, misplaced_from_start};
use crate::path::{NodeId, PathArena};
use crate::state::{Element, State};
use crate::successors::successors;

/// Available search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    Greedy,
    AStar,
    HillClimbing,
}

impl Strategy {
    /// Every strategy, in canonical report order.
    pub const ALL: [Strategy; 6] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
        Strategy::HillClimbing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth_first",
            Strategy::DepthFirst => "depth_first",
            Strategy::UniformCost => "uniform_cost",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "a_star",
            Strategy::HillClimbing => "hill_climbing",
        }
    }

    /// Human-readable heading for reports.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "Breadth first search",
            Strategy::DepthFirst => "Depth first search",
            Strategy::UniformCost => "Uniform cost search",
            Strategy::Greedy => "Greedy search",
            Strategy::AStar => "A* search",
            Strategy::HillClimbing => "Hill climbing search",
        }
    }

    /// Whether the strategy returns a visited log and a path.
    pub fn tracks_path(self) -> bool {
        self != Strategy::HillClimbing
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| InputError::UnknownStrategy(s.to_string()))
    }
}

/// Configuration for the engine
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Stop a path-tracking search after this many expansions. `None` runs
    /// until the goal is found or the frontier empties.
    pub expansion_limit: Option<usize>,
}

/// Counters collected during one path-tracking search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// States popped and expanded (equals the visited log length).
    pub expanded: usize,
    /// Successor states created, duplicates included.
    pub generated: usize,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// A successful path-tracking search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution<T> {
    /// Expanded states in expansion order, no duplicates.
    pub visited: Vec<State<T>>,
    /// States from the initial state to the goal, inclusive.
    pub path: Vec<State<T>>,
    pub stats: SearchStats,
}

impl<T: Element> Solution<T> {
    /// Number of swaps along the path.
    pub fn transitions(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Position of `state` in the visited log.
    pub fn visited_index(&self, state: &State<T>) -> Option<usize> {
        self.visited.iter().position(|visited| visited == state)
    }
}

/// Result of hill climbing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HillClimb<T> {
    /// Where the climb stopped.
    pub state: State<T>,
    /// Neighbours evaluated across all steps.
    pub examined: usize,
    /// Inversions left in `state`.
    pub inversions: usize,
    /// Whether `state` is the goal rather than a local optimum.
    pub reached_goal: bool,
}

/// Outcome of [`SearchEngine::run`]
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Path(Solution<T>),
    Local(HillClimb<T>),
}

impl<T> Outcome<T> {
    /// States explored: the visited log length, or neighbours examined for
    /// hill climbing.
    pub fn explored(&self) -> usize {
        match self {
            Outcome::Path(solution) => solution.visited.len(),
            Outcome::Local(climb) => climb.examined,
        }
    }
}

/// Search engine bound to one initial state and its goal.
///
/// The engine holds no per-search state, so every strategy can be run any
/// number of times on the same instance.
#[derive(Debug, Clone)]
pub struct SearchEngine<T> {
    initial: State<T>,
    goal: State<T>,
    config: SearchConfig,
}

/// Build an engine for `values` with the default configuration.
pub fn new_search<T: Element>(values: impl IntoIterator<Item = T>) -> SearchEngine<T> {
    SearchEngine::new(values)
}

impl<T: Element> SearchEngine<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self::with_config(values, SearchConfig::default())
    }

    pub fn with_config(values: impl IntoIterator<Item = T>, config: SearchConfig) -> Self {
        let initial = State::new(values);
        let goal = initial.sorted();
        Self {
            initial,
            goal,
            config,
        }
    }

    pub fn initial(&self) -> &State<T> {
        &self.initial
    }

    pub fn goal(&self) -> &State<T> {
        &self.goal
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run `strategy` and wrap its result.
    pub fn run(&self, strategy: Strategy) -> Result<Outcome<T>> {
        match strategy {
            Strategy::BreadthFirst => self.breadth_first().map(Outcome::Path),
            Strategy::DepthFirst => self.depth_first().map(Outcome::Path),
            Strategy::UniformCost => self.uniform_cost().map(Outcome::Path),
            Strategy::Greedy => self.greedy().map(Outcome::Path),
            Strategy::AStar => self.a_star().map(Outcome::Path),
            Strategy::HillClimbing => Ok(Outcome::Local(self.hill_climbing())),
        }
    }

    pub fn breadth_first(&self) -> Result<Solution<T>> {
        self.explore(Strategy::BreadthFirst, Fifo::new(), |_| ())
    }

    pub fn depth_first(&self) -> Result<Solution<T>> {
        self.explore(Strategy::DepthFirst, Lifo::new(), |_| ())
    }

    pub fn uniform_cost(&self) -> Result<Solution<T>> {
        self.explore(Strategy::UniformCost, MinPriority::new(), |state| {
            Priority::new(misplaced_from_start(state, &self.initial) as f64)
        })
    }

    pub fn greedy(&self) -> Result<Solution<T>> {
        self.explore(Strategy::Greedy, MinPriority::new(), |state| {
            Priority::new(absolute_difference(state, &self.goal))
        })
    }

    pub fn a_star(&self) -> Result<Solution<T>> {
        self.explore(Strategy::AStar, MinPriority::new(), |state| {
            let cost = misplaced_from_start(state, &self.initial) as f64;
            Priority::with_secondary(absolute_difference(state, &self.goal) + cost, cost)
        })
    }

    /// Steepest-descent on inversion count.
    ///
    /// Each step evaluates every neighbour and moves to the first one with
    /// the fewest inversions, but only if that is strictly fewer than the
    /// current state has.
    pub fn hill_climbing(&self) -> HillClimb<T> {
        debug!(
            event = "search_start",
            strategy = %Strategy::HillClimbing,
            length = self.initial.len(),
        );

        let mut current = self.initial.clone();
        let mut examined = 0;

        let current_inversions = loop {
            let h = inversions(&current);
            if h == 0 {
                break h;
            }

            let neighbours = successors(&current);
            examined += neighbours.len();

            let best = neighbours
                .into_iter()
                .map(|neighbour| (inversions(&neighbour), neighbour))
                .min_by_key(|(score, _)| *score);

            match best {
                Some((score, neighbour)) if score < h => {
                    trace!(event = "climb", state = %neighbour, inversions = score);
                    current = neighbour;
                }
                _ => break h,
            }
        };

        let reached_goal = current == self.goal;
        debug!(
            event = "search_end",
            strategy = %Strategy::HillClimbing,
            examined,
            inversions = current_inversions,
            reached_goal,
        );

        HillClimb {
            state: current,
            examined,
            inversions: current_inversions,
            reached_goal,
        }
    }

    /// Shared pop / discard / mark / goal-test / expand loop.
    ///
    /// Successors are pushed unconditionally; a state already expanded is
    /// dropped when it is popped again.
    fn explore<F, K>(&self, strategy: Strategy, mut frontier: F, key: K) -> Result<Solution<T>>
    where
        F: Frontier<NodeId>,
        K: Fn(&State<T>) -> F::Key,
    {
        debug!(
            event = "search_start",
            strategy = %strategy,
            length = self.initial.len(),
        );

        let mut arena = PathArena::new();
        let mut seen: HashSet<State<T>> = HashSet::new();
        let mut visited: Vec<State<T>> = Vec::new();
        let mut stats = SearchStats::default();

        let root = arena.root(self.initial.clone());
        frontier.push(root, key(&self.initial));
        stats.frontier_high_water = frontier.len();

        while let Some(id) = frontier.pop() {
            let state = arena.state(id);
            if seen.contains(state) {
                continue;
            }

            if let Some(limit) = self.config.expansion_limit {
                if visited.len() >= limit {
                    debug!(event = "search_limit", strategy = %strategy, limit);
                    return Err(SearchError::LimitReached { limit });
                }
            }

            seen.insert(state.clone());
            visited.push(state.clone());
            stats.expanded += 1;

            if *state == self.goal {
                let path = arena.path(id);
                debug!(
                    event = "search_end",
                    strategy = %strategy,
                    expanded = stats.expanded,
                    generated = stats.generated,
                    frontier_high_water = stats.frontier_high_water,
                    path_len = path.len(),
                );
                return Ok(Solution {
                    visited,
                    path,
                    stats,
                });
            }

            trace!(event = "expand", state = %state, depth = arena.depth(id));

            let children = successors(state);
            stats.generated += children.len();
            for child in children {
                let child_key = key(&child);
                let child_id = arena.extend(id, child);
                frontier.push(child_id, child_key);
            }
            stats.frontier_high_water = stats.frontier_high_water.max(frontier.len());
        }

        debug!(
            event = "search_exhausted",
            strategy = %strategy,
            expanded = stats.expanded,
        );
        Err(SearchError::Exhausted {
            expanded: stats.expanded,
        })
    }
}
