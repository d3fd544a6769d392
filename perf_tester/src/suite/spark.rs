//!
//! The Spark core tests suite.
//!

use std::path::Path;

use crate::error::Error;
use crate::result::extract;
use crate::result::Body;
use crate::result::ResultRecord;
use crate::statistics::Statistics;

use super::jvm::Assembly;

///
/// The Spark core tests suite.
///
/// Reports one comma-separated sample list per run.
///
#[derive(Debug, Clone)]
pub struct SparkTests {
    /// The suite assembly.
    pub assembly: Assembly,
}

impl SparkTests {
    /// The suite name.
    pub const NAME: &'static str = "spark-tests";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(project_directory: &Path, sbt_command: &str) -> Self {
        Self {
            assembly: Assembly::new(
                project_directory,
                Self::NAME,
                "spark-perf-tests-assembly.jar",
                sbt_command,
            ),
        }
    }

    ///
    /// Reduces the output to a statistics record.
    ///
    /// The missing results line is fatal for this suite.
    ///
    pub fn process_output(
        short_name: &str,
        app_flags: &[String],
        stdout: &str,
        ignored_trials: usize,
    ) -> Result<ResultRecord, Error> {
        let samples =
            extract::samples(stdout, ignored_trials)?.ok_or_else(|| Error::MissingResults {
                name: short_name.to_owned(),
            })?;
        let statistics = Statistics::from_samples(samples.as_slice())?;
        Ok(ResultRecord::new(
            short_name.to_owned(),
            app_flags,
            Body::Statistics { statistics },
        ))
    }
}
