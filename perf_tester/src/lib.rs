//!
//! The Spark performance tester library.
//!

pub mod benchmark;
pub mod build_manager;
pub mod cluster;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod option_set;
pub mod options;
pub mod plan;
pub mod process;
pub mod result;
pub mod runner;
pub mod statistics;
pub mod suite;
pub mod summary;
pub mod utils;
pub mod value;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use self::benchmark::Benchmark;
pub use self::benchmark::format::BenchmarkFormat;
pub use self::build_manager::SparkBuildManager;
pub use self::cluster::standalone::StandaloneCluster;
pub use self::cluster::Cluster;
pub use self::config::Config;
pub use self::error::Error;
pub use self::filters::Filters;
pub use self::option_set::scaling::Scaling;
pub use self::option_set::OptionSet;
pub use self::options::Options;
pub use self::plan::invocation::Invocation;
pub use self::plan::TestPlan;
pub use self::result::Body;
pub use self::result::ResultRecord;
pub use self::runner::failure_policy::FailurePolicy;
pub use self::runner::TestRunner;
pub use self::statistics::Statistics;
pub use self::suite::settings::Settings;
pub use self::suite::Suite;
pub use self::summary::Summary;
pub use self::value::Value;
pub use self::workflow::Workflow;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;
