//!
//! The benchmark definition of the configuration file.
//!

use super::option::OptionConfig;

///
/// The test suite kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteKind {
    /// The Spark core tests.
    Spark,
    /// The Spark Streaming tests.
    Streaming,
    /// The MLlib tests.
    Mllib,
    /// The PySpark tests.
    Python,
}

///
/// The benchmark definition of the configuration file.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestConfig {
    /// The suite running the test.
    pub suite: SuiteKind,
    /// The test short name.
    pub short_name: String,
    /// The main class for JVM suites, or the script for the PySpark suite.
    pub main_class_or_script: String,
    /// The workload size multiplier.
    #[serde(default = "TestConfig::default_scale_factor")]
    pub scale_factor: f64,
    /// The native runtime option sets.
    #[serde(default)]
    pub runtime_options: Vec<OptionConfig>,
    /// The application option sets.
    #[serde(default)]
    pub app_options: Vec<OptionConfig>,
}

impl TestConfig {
    fn default_scale_factor() -> f64 {
        1.0
    }
}
