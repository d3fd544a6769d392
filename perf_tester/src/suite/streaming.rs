//!
//! The Spark Streaming tests suite.
//!

use std::path::Path;

use crate::result::extract;
use crate::result::Body;
use crate::result::ResultRecord;

use super::jvm::Assembly;

///
/// The Spark Streaming tests suite.
///
/// Reports a single verdict line near the end of the output.
///
#[derive(Debug, Clone)]
pub struct StreamingTests {
    /// The suite assembly.
    pub assembly: Assembly,
}

impl StreamingTests {
    /// The suite name.
    pub const NAME: &'static str = "streaming-tests";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(project_directory: &Path, sbt_command: &str) -> Self {
        Self {
            assembly: Assembly::new(
                project_directory,
                Self::NAME,
                "streaming-perf-tests-assembly.jar",
                sbt_command,
            ),
        }
    }

    ///
    /// Extracts the verdict from the last output lines.
    ///
    /// A missing verdict yields a failed record rather than an error.
    ///
    pub fn process_output(short_name: &str, app_flags: &[String], stdout: &str) -> ResultRecord {
        let result = extract::streaming_result(stdout).map(|result| result.to_owned());
        ResultRecord::new(short_name.to_owned(), app_flags, Body::Streaming { result })
    }
}
