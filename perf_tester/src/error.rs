//!
//! The performance tester error.
//!

use std::path::PathBuf;

///
/// The performance tester error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The benchmark definition or option set is malformed.
    #[error("Configuration: {message}")]
    Configuration {
        /// The error description.
        message: String,
    },
    /// The test suite artifact could not be built.
    #[error("Building suite `{suite}`: {message}")]
    Build {
        /// The suite name.
        suite: String,
        /// The build error description.
        message: String,
    },
    /// The benchmark process emitted something other than a JSON object where one was expected.
    #[error("Protocol violation in test `{name}` at output line {line}: {message}")]
    ProtocolViolation {
        /// The test short name.
        name: String,
        /// The 1-based stdout line number.
        line: usize,
        /// The violation description.
        message: String,
    },
    /// Fewer samples than the warm-up discard requires.
    #[error("Expecting at least {required} results but only found {found}")]
    InsufficientSamples {
        /// The minimal number of samples.
        required: usize,
        /// The actual number of samples.
        found: usize,
    },
    /// The results marker is absent from the benchmark output.
    #[error("Test `{name}` did not produce expected results")]
    MissingResults {
        /// The test short name.
        name: String,
    },
    /// A sample is not a finite number.
    #[error("Sample `{sample}` is not a finite number: {message}")]
    MalformedSample {
        /// The raw sample.
        sample: String,
        /// The error description.
        message: String,
    },
    /// A metric sample does not have the `runtime;train;test` shape.
    #[error("Sample `{sample}` does not contain {expected} metrics")]
    MalformedMetrics {
        /// The raw sample.
        sample: String,
        /// The expected number of metrics.
        expected: usize,
    },
    /// The test produced a `FAILED` result record.
    #[error("Test `{name}` failed: {record}")]
    TestFailed {
        /// The test short name.
        name: String,
        /// The rendered result record.
        record: String,
    },
    /// The benchmark process did not finish before the deadline.
    #[error("Test `{name}` timed out after {timeout:?}")]
    Timeout {
        /// The test short name.
        name: String,
        /// The deadline.
        timeout: std::time::Duration,
    },
    /// The cluster collaborator failed.
    #[error("Cluster `{operation}`: {error:#}")]
    Cluster {
        /// The cluster operation.
        operation: &'static str,
        /// The underlying error.
        error: anyhow::Error,
    },
    /// A filesystem or process I/O error.
    #[error("{context} {path:?}: {error}")]
    Io {
        /// What was being done.
        context: &'static str,
        /// The file or executable path.
        path: PathBuf,
        /// The underlying error.
        error: std::io::Error,
    },
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn configuration<S>(message: S) -> Self
    where
        S: ToString,
    {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn io<P>(context: &'static str, path: P, error: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::Io {
            context,
            path: path.into(),
            error,
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn cluster(operation: &'static str, error: anyhow::Error) -> Self {
        Self::Cluster { operation, error }
    }

    ///
    /// Whether the error concerns a single invocation and may be skipped over
    /// with the `continue` failure policy.
    ///
    /// Configuration, build, cluster and I/O errors always abort the run.
    ///
    pub fn is_invocation_scoped(&self) -> bool {
        matches!(
            self,
            Self::ProtocolViolation { .. }
                | Self::InsufficientSamples { .. }
                | Self::MissingResults { .. }
                | Self::MalformedSample { .. }
                | Self::MalformedMetrics { .. }
                | Self::TestFailed { .. }
                | Self::Timeout { .. }
        )
    }
}
