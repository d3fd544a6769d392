//!
//! The suite run settings.
//!

use std::path::PathBuf;
use std::time::Duration;

///
/// The suite run settings.
///
/// Shared by all invocations of a run.
///
#[derive(Debug, Clone)]
pub struct Settings {
    /// The directory with the per-test stdout and stderr logs.
    pub log_directory: PathBuf,
    /// The number of warm-up trials discarded before computing statistics.
    pub ignored_trials: usize,
    /// The time limit of one benchmark process, unlimited if `None`.
    pub timeout: Option<Duration>,
    /// Whether to print the commands, environments and trial records.
    pub verbose: bool,
    /// Whether to suppress the progress output.
    pub quiet: bool,
}

impl Settings {
    ///
    /// Returns the stdout log path of the test.
    ///
    pub fn stdout_log(&self, name: &str) -> PathBuf {
        self.log_directory.join(format!("{name}.out"))
    }

    ///
    /// Returns the stderr log path of the test.
    ///
    pub fn stderr_log(&self, name: &str) -> PathBuf {
        self.log_directory.join(format!("{name}.err"))
    }
}
