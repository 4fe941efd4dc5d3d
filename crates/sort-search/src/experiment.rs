//! Repeated trials over random inputs, averaging how much each strategy
//! explores.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::error::{ExperimentError, InputError};
use crate::solver::{SearchConfig, SearchEngine, Strategy};
use crate::state::Number;

/// Parameters for an experiment run
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Trials per strategy.
    pub iterations: usize,
    /// Values per random input.
    pub length: usize,
    /// RNG seed; each strategy restarts from it so all see the same inputs.
    pub seed: u64,
    /// Inclusive lower bound for sampled values.
    pub low: f64,
    /// Inclusive upper bound for sampled values.
    pub high: f64,
    pub search: SearchConfig,
}

impl ExperimentConfig {
    /// Check that `[low, high]` is a range `sample_input` can draw from.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        // The uniform sampler scales by span / (1 - EPSILON)
        let scale = (self.high - self.low) / (1.0 - f64::EPSILON);
        if self.low <= self.high && scale.is_finite() {
            Ok(())
        } else {
            Err(ExperimentError::InvalidRange {
                low: self.low,
                high: self.high,
            })
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            iterations: 25,
            length: 4,
            seed: 42,
            low: -300.0,
            high: 300.0,
            search: SearchConfig::default(),
        }
    }
}

/// One sampled input and how much the strategy explored on it
#[derive(Debug, Clone, Serialize)]
pub struct Trial {
    pub input: Vec<Number>,
    pub explored: usize,
}

/// Aggregate for one strategy
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentReport {
    pub strategy: Strategy,
    pub length: usize,
    pub trials: Vec<Trial>,
    pub average_explored: f64,
}

/// Sample `length` values in `[low, high]`, rounded to two decimals.
///
/// Values too large to scale by 100 are kept unrounded. The range must have
/// passed [`ExperimentConfig::validate`].
fn sample_input(rng: &mut StdRng, config: &ExperimentConfig) -> Result<Vec<Number>, InputError> {
    (0..config.length)
        .map(|_| {
            let raw: f64 = rng.random_range(config.low..=config.high);
            let scaled = raw * 100.0;
            let value = if scaled.is_finite() {
                scaled.round() / 100.0
            } else {
                raw
            };
            Number::try_from(value)
        })
        .collect()
}

/// Run `config.iterations` trials of `strategy`.
///
/// Fails up front on an unusable sampling range, then on the first trial
/// whose search fails, which can only happen when an expansion limit is
/// configured.
pub fn run_experiment(
    config: &ExperimentConfig,
    strategy: Strategy,
) -> Result<ExperimentReport, ExperimentError> {
    config.validate()?;

    info!(
        event = "experiment_start",
        strategy = %strategy,
        iterations = config.iterations,
        length = config.length,
        seed = config.seed,
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut trials = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let input = sample_input(&mut rng, config)?;
        let engine = SearchEngine::with_config(input.iter().copied(), config.search.clone());
        let explored = engine.run(strategy)?.explored();
        trials.push(Trial { input, explored });
    }

    let average_explored = if trials.is_empty() {
        0.0
    } else {
        trials.iter().map(|t| t.explored).sum::<usize>() as f64 / trials.len() as f64
    };

    info!(
        event = "experiment_end",
        strategy = %strategy,
        average_explored,
    );

    Ok(ExperimentReport {
        strategy,
        length: config.length,
        trials,
        average_explored,
    })
}

/// Text summary; `details` adds one line per trial.
pub fn format_experiment(report: &ExperimentReport, details: bool) -> String {
    let mut out = format!(
        "Running {} with list length {} for a total of {} iterations\n",
        report.strategy.label(),
        report.length,
        report.trials.len()
    );
    if details {
        for trial in &report.trials {
            let values: Vec<String> = trial.input.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!(
                "Input: [{}]\tNodes Explored: {}\n",
                values.join(", "),
                trial.explored
            ));
        }
    }
    out.push_str(&format!("Average nodes explored: {}\n", report.average_explored));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            iterations: 5,
            length: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::default();
        assert_eq!(config.iterations, 25);
        assert_eq!(config.seed, 42);
        assert_eq!(config.low, -300.0);
        assert_eq!(config.high, 300.0);
        assert!(config.search.expansion_limit.is_none());
    }

    #[test]
    fn test_samples_are_rounded_and_bounded() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(config.seed);
        for _ in 0..20 {
            for value in sample_input(&mut rng, &config).unwrap() {
                let v = value.get();
                assert!((-300.0..=300.0).contains(&v));
                assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_same_inputs_for_every_strategy() {
        let config = small_config();
        let bfs = run_experiment(&config, Strategy::BreadthFirst).unwrap();
        let greedy = run_experiment(&config, Strategy::Greedy).unwrap();

        assert_eq!(bfs.trials.len(), 5);
        for (a, b) in bfs.trials.iter().zip(&greedy.trials) {
            assert_eq!(a.input, b.input);
            assert_eq!(a.input.len(), 4);
        }
    }

    #[test]
    fn test_average_matches_trials() {
        let report = run_experiment(&small_config(), Strategy::HillClimbing).unwrap();
        let total: usize = report.trials.iter().map(|t| t.explored).sum();
        assert_eq!(report.average_explored, total as f64 / 5.0);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = run_experiment(&small_config(), Strategy::AStar).unwrap();
        let b = run_experiment(&small_config(), Strategy::AStar).unwrap();
        assert_eq!(a.average_explored, b.average_explored);
    }

    #[test]
    fn test_limit_failure_propagates() {
        let config = ExperimentConfig {
            length: 5,
            search: SearchConfig {
                expansion_limit: Some(0),
            },
            ..small_config()
        };
        assert_eq!(
            run_experiment(&config, Strategy::BreadthFirst).unwrap_err(),
            ExperimentError::Search(SearchError::LimitReached { limit: 0 })
        );
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let config = ExperimentConfig {
            low: 5.0,
            high: 1.0,
            ..small_config()
        };
        assert_eq!(
            run_experiment(&config, Strategy::Greedy).unwrap_err(),
            ExperimentError::InvalidRange {
                low: 5.0,
                high: 1.0
            }
        );
    }

    #[test]
    fn test_overflowing_span_is_rejected() {
        let config = ExperimentConfig {
            low: -1e308,
            high: 1e308,
            ..small_config()
        };
        assert!(matches!(
            run_experiment(&config, Strategy::BreadthFirst),
            Err(ExperimentError::InvalidRange { .. })
        ));

        let config = ExperimentConfig {
            high: f64::INFINITY,
            ..small_config()
        };
        assert!(config.validate().is_err());

        let config = ExperimentConfig {
            low: -f64::MAX / 2.0,
            high: f64::MAX / 2.0,
            ..small_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_values_are_kept_unrounded() {
        let config = ExperimentConfig {
            iterations: 3,
            low: 1e307,
            high: 1.5e307,
            ..small_config()
        };
        let report = run_experiment(&config, Strategy::HillClimbing).unwrap();
        for trial in &report.trials {
            assert_eq!(trial.input.len(), 4);
            for value in &trial.input {
                assert!((1e307..=1.5e307).contains(&value.get()), "{value}");
            }
        }
    }

    #[test]
    fn test_single_point_range() {
        let config = ExperimentConfig {
            low: 7.25,
            high: 7.25,
            ..small_config()
        };
        let report = run_experiment(&config, Strategy::BreadthFirst).unwrap();
        assert!(report.trials.iter().all(|t| t.explored == 1));
    }

    #[test]
    fn test_zero_iterations() {
        let config = ExperimentConfig {
            iterations: 0,
            ..Default::default()
        };
        let report = run_experiment(&config, Strategy::DepthFirst).unwrap();
        assert!(report.trials.is_empty());
        assert_eq!(report.average_explored, 0.0);
    }

    #[test]
    fn test_format_experiment() {
        let report = run_experiment(&small_config(), Strategy::Greedy).unwrap();
        let text = format_experiment(&report, true);
        assert!(text.starts_with(
            "Running Greedy search with list length 4 for a total of 5 iterations"
        ));
        assert_eq!(text.matches("Nodes Explored:").count(), 5);
        assert!(text.contains("Average nodes explored:"));
    }
}
