//!
//! The performance tester arguments.
//!

pub mod validation;

use std::path::PathBuf;

use clap::Parser;

///
/// The performance tester arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the submit commands, the test environments and every trial result.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,

    /// The YAML configuration file.
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config_file: PathBuf,

    /// Runs only tests whose short name contains any string from the specified ones.
    #[arg(short, long)]
    pub name: Vec<String>,

    /// Choose between `build` to build the test suites only, and `run` to build and run.
    #[arg(long, default_value_t = perf_tester::Workflow::BuildAndRun)]
    pub workflow: perf_tester::Workflow,

    /// What to do when a test fails: `abort` or `continue`.
    /// Overrides the configuration file.
    #[arg(long)]
    pub failure_policy: Option<perf_tester::FailurePolicy>,

    /// The time limit of one benchmark process in seconds.
    /// Overrides the configuration file.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// The benchmark output path, if requested.
    #[arg(short, long)]
    pub benchmark: Option<PathBuf>,

    /// The benchmark output format: `json` or `csv`.
    #[arg(long = "benchmark-format", default_value_t = perf_tester::BenchmarkFormat::Json)]
    pub benchmark_format: perf_tester::BenchmarkFormat,
}
