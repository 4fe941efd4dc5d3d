//! Text and JSON renderings of search results.

use serde::Serialize;

use crate::error::Result;
use crate::solver::{HillClimb, Outcome, SearchStats, Solution, Strategy};
use crate::state::{Element, State};

/// List the visited log, one line per state.
pub fn format_visited<T: Element>(visited: &[State<T>], prefix: &str) -> String {
    let mut out = String::from("-- Visited States --\n");
    out.push_str(&format!("Total states explored: {}\n", visited.len()));
    for (i, state) in visited.iter().enumerate() {
        out.push_str(&format!("{prefix} {i} -> {state}\n"));
    }
    out
}

/// List the solution path. Each state is labelled with its position in the
/// visited log, so the two listings can be cross-referenced.
pub fn format_path<T: Element>(solution: &Solution<T>, prefix: &str) -> String {
    let mut out = String::from("-- Solution Path --\n");
    out.push_str(&format!("Length of solution path: {}\n", solution.path.len()));
    for state in &solution.path {
        match solution.visited_index(state) {
            Some(index) => out.push_str(&format!("{prefix} {index} -> {state}\n")),
            None => out.push_str(&format!("{prefix} ? -> {state}\n")),
        }
    }
    out
}

pub fn format_hill_climb<T: Element>(climb: &HillClimb<T>) -> String {
    let mut out = format!(
        "Final State -> {}, Nodes Explored -> {}\n",
        climb.state, climb.examined
    );
    if climb.reached_goal {
        out.push_str("Reached the goal\n");
    } else {
        out.push_str(&format!(
            "Stopped at a local optimum with {} inversions\n",
            climb.inversions
        ));
    }
    out
}

/// Full text block for one strategy run.
pub fn format_report<T: Element>(strategy: Strategy, result: &Result<Outcome<T>>) -> String {
    let mut out = format!("\n{} Output\n\n", strategy.label());
    match result {
        Ok(Outcome::Path(solution)) => {
            out.push_str(&format_path(solution, "State"));
            out.push_str(&format_visited(&solution.visited, "State"));
        }
        Ok(Outcome::Local(climb)) => out.push_str(&format_hill_climb(climb)),
        Err(err) => out.push_str(&format!("No solution: {err}\n")),
    }
    out
}

/// JSON output for one strategy run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyReport<T> {
    pub strategy: Strategy,
    pub solved: bool,
    pub explored: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<State<T>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited: Option<Vec<State<T>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_state: Option<State<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inversions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Element> StrategyReport<T> {
    pub fn new(strategy: Strategy, result: &Result<Outcome<T>>) -> Self {
        let mut report = Self {
            strategy,
            solved: false,
            explored: 0,
            path: None,
            visited: None,
            stats: None,
            final_state: None,
            inversions: None,
            error: None,
        };
        match result {
            Ok(Outcome::Path(solution)) => {
                report.solved = true;
                report.explored = solution.visited.len();
                report.path = Some(solution.path.clone());
                report.visited = Some(solution.visited.clone());
                report.stats = Some(solution.stats.clone());
            }
            Ok(Outcome::Local(climb)) => {
                report.solved = climb.reached_goal;
                report.explored = climb.examined;
                report.final_state = Some(climb.state.clone());
                report.inversions = Some(climb.inversions);
            }
            Err(err) => report.error = Some(err.to_string()),
        }
        report
    }
}
