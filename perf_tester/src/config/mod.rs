//!
//! The performance tester configuration file.
//!

pub mod option;
pub mod test;

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::option_set::OptionSet;
use crate::plan::TestPlan;
use crate::runner::failure_policy::FailurePolicy;
use crate::suite::python::PythonTests;
use crate::suite::Suite;

use self::test::SuiteKind;
use self::test::TestConfig;

///
/// The performance tester configuration file.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The Spark installation of the built-in cluster.
    pub spark_home: PathBuf,
    /// The master URL.
    pub cluster_url: String,
    /// The driver memory setting.
    #[serde(default = "Config::default_driver_memory")]
    pub driver_memory: String,
    /// The Spark configuration directory, `<spark_home>/conf` if unset.
    #[serde(default)]
    pub conf_dir: Option<PathBuf>,
    /// Whether to run against the built-in cluster instead of building Spark from sources.
    #[serde(default = "Config::default_use_cluster_spark")]
    pub use_cluster_spark: bool,
    /// The Spark commits to build and run against.
    #[serde(default)]
    pub commit_ids: Vec<String>,
    /// The Spark repository to clone.
    #[serde(default = "Config::default_spark_git_repo")]
    pub spark_git_repo: String,
    /// Whether to merge every commit into `master` before building it.
    #[serde(default)]
    pub merge_commit_into_master: bool,
    /// The directory with the Spark source checkouts.
    #[serde(default = "Config::default_spark_versions_directory")]
    pub spark_versions_directory: PathBuf,
    /// The directory with the test suite modules.
    #[serde(default = "Config::default_project_directory")]
    pub project_directory: PathBuf,
    /// The sbt launcher, relative to a suite module directory.
    #[serde(default = "Config::default_sbt_command")]
    pub sbt_command: String,
    /// The number of warm-up trials discarded before computing statistics.
    #[serde(default = "Config::default_ignored_trials")]
    pub ignored_trials: usize,
    /// The file the result records are appended to, timestamped in `results/` if unset.
    #[serde(default)]
    pub output_filename: Option<PathBuf>,
    /// The directory with the per-test logs.
    #[serde(default = "Config::default_log_directory")]
    pub log_directory: PathBuf,
    /// What to do when a single invocation fails.
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// The time limit of one benchmark process.
    #[serde(default)]
    pub invocation_timeout_secs: Option<u64>,
    /// The delay after stopping and after starting the cluster.
    #[serde(default = "Config::default_grace_period_secs")]
    pub grace_period_secs: u64,
    /// The delay between two worker probes.
    #[serde(default = "Config::default_worker_poll_interval_secs")]
    pub worker_poll_interval_secs: u64,
    /// The number of worker probes before giving up.
    #[serde(default = "Config::default_worker_poll_attempts")]
    pub worker_poll_attempts: usize,
    /// The benchmark definitions in execution order.
    #[serde(default)]
    pub tests: Vec<TestConfig>,
}

impl Config {
    /// The PySpark scripts directory, relative to the project directory.
    pub const PYTHON_SCRIPTS_DIRECTORY: &'static str = PythonTests::NAME;

    ///
    /// Reads and validates the configuration file.
    ///
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| Error::io("Configuration file reading", path, error))?;
        Self::from_yaml(text.as_str()).map_err(|error| match error {
            Error::Configuration { message } => {
                Error::configuration(format!("{path:?}: {message}"))
            }
            error => error,
        })
    }

    ///
    /// Parses and validates the configuration text.
    ///
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(text).map_err(Error::configuration)?;
        config.validate()?;
        Ok(config)
    }

    ///
    /// Expands the benchmark definitions into the test plan.
    ///
    /// All tests of one suite kind share a single suite instance, so each suite is built once.
    ///
    pub fn plan(&self) -> Result<TestPlan, Error> {
        let mut suites: HashMap<SuiteKind, Arc<Suite>> = HashMap::new();
        let mut plan = TestPlan::default();
        for test in self.tests.iter() {
            let suite = suites
                .entry(test.suite)
                .or_insert_with(|| Arc::new(self.suite(test.suite)))
                .clone();
            let runtime_option_sets = Self::option_sets(test.runtime_options.as_slice())?;
            let app_option_sets = Self::option_sets(test.app_options.as_slice())?;
            plan.add_test(
                test.short_name.as_str(),
                suite,
                test.main_class_or_script.as_str(),
                runtime_option_sets.as_slice(),
                app_option_sets.as_slice(),
                test.scale_factor,
            )?;
        }
        Ok(plan)
    }

    ///
    /// Returns the Spark configuration directory.
    ///
    pub fn conf_dir(&self) -> PathBuf {
        self.conf_dir
            .clone()
            .unwrap_or_else(|| self.spark_home.join("conf"))
    }

    ///
    /// Returns the output file, timestamped at `now` if not configured.
    ///
    pub fn output_file(&self, now: chrono::DateTime<chrono::Utc>) -> PathBuf {
        self.output_filename.clone().unwrap_or_else(|| {
            PathBuf::from("results").join(format!(
                "perf_output_{}",
                now.format("%Y-%m-%d_%H-%M-%S")
            ))
        })
    }

    ///
    /// Returns the benchmark process time limit.
    ///
    pub fn invocation_timeout(&self) -> Option<Duration> {
        self.invocation_timeout_secs.map(Duration::from_secs)
    }

    ///
    /// Returns the delay after stopping and after starting the cluster.
    ///
    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_secs)
    }

    ///
    /// Returns the delay between two worker probes.
    ///
    pub fn worker_poll_interval(&self) -> Duration {
        Duration::from_secs(self.worker_poll_interval_secs)
    }

    ///
    /// Checks the invariants the types do not express.
    ///
    fn validate(&self) -> Result<(), Error> {
        if self.cluster_url.is_empty() {
            return Err(Error::configuration("`cluster_url` is empty"));
        }
        if !self.use_cluster_spark && self.commit_ids.is_empty() {
            return Err(Error::configuration(
                "`commit_ids` must list at least one commit unless `use_cluster_spark` is set",
            ));
        }
        if self.worker_poll_attempts == 0 {
            return Err(Error::configuration(
                "`worker_poll_attempts` must be positive",
            ));
        }
        if self.invocation_timeout_secs == Some(0) {
            return Err(Error::configuration(
                "`invocation_timeout_secs` must be positive",
            ));
        }
        Ok(())
    }

    ///
    /// Creates the suite of the kind.
    ///
    fn suite(&self, kind: SuiteKind) -> Suite {
        let project = self.project_directory.as_path();
        let sbt = self.sbt_command.as_str();
        match kind {
            SuiteKind::Spark => Suite::spark(project, sbt),
            SuiteKind::Streaming => Suite::streaming(project, sbt),
            SuiteKind::Mllib => Suite::mllib(project, sbt),
            SuiteKind::Python => {
                Suite::python(project.join(Self::PYTHON_SCRIPTS_DIRECTORY).as_path())
            }
        }
    }

    ///
    /// Converts the option entries of one category.
    ///
    fn option_sets(options: &[option::OptionConfig]) -> Result<Vec<OptionSet>, Error> {
        options
            .iter()
            .cloned()
            .map(OptionSet::try_from)
            .collect()
    }

    fn default_driver_memory() -> String {
        "1g".to_owned()
    }

    fn default_use_cluster_spark() -> bool {
        true
    }

    fn default_spark_git_repo() -> String {
        "https://github.com/apache/spark.git".to_owned()
    }

    fn default_spark_versions_directory() -> PathBuf {
        PathBuf::from("spark_versions")
    }

    fn default_project_directory() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_sbt_command() -> String {
        "sbt/sbt".to_owned()
    }

    fn default_ignored_trials() -> usize {
        2
    }

    fn default_log_directory() -> PathBuf {
        PathBuf::from("results/logs")
    }

    fn default_grace_period_secs() -> u64 {
        5
    }

    fn default_worker_poll_interval_secs() -> u64 {
        1
    }

    fn default_worker_poll_attempts() -> usize {
        60
    }
}
