//!
//! The invocation result record.
//!

pub mod extract;

use crate::statistics::Statistics;

///
/// The invocation result body.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Body {
    /// The single-metric statistics.
    Statistics {
        /// The reduced samples.
        statistics: Statistics,
    },
    /// The runtime, training set and test set metric statistics.
    Metrics {
        /// The runtime statistics.
        runtime: Statistics,
        /// The training set metric statistics.
        train: Statistics,
        /// The test set metric statistics.
        test: Statistics,
    },
    /// The streaming verdict, `None` if the benchmark did not report one.
    Streaming {
        /// The verdict text.
        result: Option<String>,
    },
    /// The benchmark did not report results.
    Failed,
}

///
/// The invocation result record.
///
/// Appended to the output file once per invocation.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResultRecord {
    /// The test short name.
    pub short_name: String,
    /// The space-separated application flags.
    pub options: String,
    /// The result body.
    pub body: Body,
}

impl ResultRecord {
    /// The failure marker in the rendered record.
    pub const FAILED: &'static str = "FAILED";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(short_name: String, app_flags: &[String], body: Body) -> Self {
        Self {
            short_name,
            options: app_flags.join(" "),
            body,
        }
    }

    ///
    /// Whether the record represents a failure.
    ///
    pub fn is_failed(&self) -> bool {
        matches!(
            self.body,
            Body::Failed | Body::Streaming { result: None }
        )
    }

    ///
    /// Returns the headline figure for the progress output.
    ///
    pub fn body_summary(&self) -> String {
        match &self.body {
            Body::Statistics { statistics } => format!("mean {:.3}", statistics.mean),
            Body::Metrics { runtime, .. } => format!("runtime mean {:.3}", runtime.mean),
            Body::Streaming {
                result: Some(result),
            } => result.to_owned(),
            Body::Streaming { result: None } | Body::Failed => Self::FAILED.to_owned(),
        }
    }
}

impl std::fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            Body::Statistics { statistics } => {
                write!(f, "{}, {}, {statistics}", self.short_name, self.options)
            }
            Body::Metrics {
                runtime,
                train,
                test,
            } => {
                writeln!(f, "{}, {}", self.short_name, self.options)?;
                writeln!(f, "Runtime: {runtime}")?;
                writeln!(f, "Train Set Metric: {train}")?;
                write!(f, "Test Set Metric: {test}")
            }
            Body::Streaming { result } => write!(
                f,
                "{} [ {} ] - {}",
                self.short_name,
                self.options,
                result.as_deref().unwrap_or(Self::FAILED)
            ),
            Body::Failed => write!(f, "{}, {}, {}", self.short_name, self.options, Self::FAILED),
        }
    }
}
