//! CLI entry point for the sort-search engine.
//!
//! Usage:
//!   sort-search solve <values>... [options]
//!   sort-search solve --stdin [options]
//!   sort-search experiment [options]
//!
//! Options:
//!   --strategy <name>     Strategy to run, repeatable (default: all six)
//!   --limit <n>           Expansion cap for path-tracking searches
//!   --json                Print JSON instead of text
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use sort_search::{
    format_experiment, format_report, parse_numbers, run_experiment, ExperimentConfig, InputError,
    Number, SearchConfig, SearchEngine, State, Strategy, StrategyReport,
};

#[derive(Parser)]
#[command(name = "sort-search")]
#[command(about = "Search strategies for sorting a sequence by adjacent swaps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort one sequence with one or more strategies
    Solve {
        /// Values to sort (use --stdin to read them from stdin)
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<Number>,

        /// Read whitespace-separated values from stdin
        #[arg(long)]
        stdin: bool,

        /// Strategy to run; repeat for several (default: all)
        #[arg(long = "strategy", short = 's', value_name = "NAME")]
        strategies: Vec<Strategy>,

        /// Stop path-tracking searches after this many expansions
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Average explored states over random inputs
    Experiment {
        /// Trials per strategy
        #[arg(long, default_value = "25")]
        iterations: usize,

        /// Values per random input
        #[arg(long, default_value = "4")]
        length: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Lower bound for sampled values
        #[arg(long, default_value = "-300", allow_negative_numbers = true)]
        low: f64,

        /// Upper bound for sampled values
        #[arg(long, default_value = "300", allow_negative_numbers = true)]
        high: f64,

        /// Strategy to run; repeat for several (default: all)
        #[arg(long = "strategy", short = 's', value_name = "NAME")]
        strategies: Vec<Strategy>,

        /// Stop path-tracking searches after this many expansions
        #[arg(long)]
        limit: Option<usize>,

        /// Print every sampled input
        #[arg(long)]
        details: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// JSON output for the solve command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    input: State<Number>,
    goal: State<Number>,
    results: Vec<StrategyReport<Number>>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Solve {
            values,
            stdin,
            strategies,
            limit,
            json,
        } => {
            let values = if stdin {
                read_stdin_values()
            } else if values.is_empty() {
                Err(InputError::Empty)
            } else {
                Ok(values)
            };

            match values {
                Ok(values) => solve(values, &pick_strategies(strategies), limit, json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }

        Commands::Experiment {
            iterations,
            length,
            seed,
            low,
            high,
            strategies,
            limit,
            details,
            json,
        } => {
            let config = ExperimentConfig {
                iterations,
                length,
                seed,
                low,
                high,
                search: SearchConfig {
                    expansion_limit: limit,
                },
            };
            match config.validate() {
                Ok(()) => experiment(&config, &pick_strategies(strategies), details, json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    };

    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_stdin_values() -> Result<Vec<Number>, InputError> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| InputError::Read(e.to_string()))?;
    parse_numbers(&buffer)
}

fn pick_strategies(requested: Vec<Strategy>) -> Vec<Strategy> {
    if requested.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        requested
    }
}

fn solve(values: Vec<Number>, strategies: &[Strategy], limit: Option<usize>, json: bool) -> i32 {
    let config = SearchConfig {
        expansion_limit: limit,
    };
    let engine = SearchEngine::with_config(values, config);

    let results: Vec<_> = strategies
        .iter()
        .map(|&strategy| (strategy, engine.run(strategy)))
        .collect();
    let all_ok = results.iter().all(|(_, result)| result.is_ok());

    if json {
        let output = SolveOutput {
            input: engine.initial().clone(),
            goal: engine.goal().clone(),
            results: results
                .iter()
                .map(|(strategy, result)| StrategyReport::new(*strategy, result))
                .collect(),
        };
        if !print_json(&output) {
            return 1;
        }
    } else {
        println!("Length of Array -> {}", engine.initial().len());
        println!("Array -> {}", engine.initial());
        for (strategy, result) in &results {
            print!("{}", format_report(*strategy, result));
        }
    }

    if all_ok {
        0
    } else {
        1
    }
}

fn experiment(
    config: &ExperimentConfig,
    strategies: &[Strategy],
    details: bool,
    json: bool,
) -> i32 {
    let mut reports = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        match run_experiment(config, strategy) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Error: {} failed: {}", strategy, e);
                return 1;
            }
        }
    }

    if json {
        if !print_json(&reports) {
            return 1;
        }
    } else {
        for report in &reports {
            println!();
            print!("{}", format_experiment(report, details));
        }
    }
    0
}

fn print_json<T: Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            true
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            false
        }
    }
}
