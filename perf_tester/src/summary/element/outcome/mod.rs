//!
//! The performance tester summary element outcome.
//!

use crate::result::ResultRecord;

///
/// The performance tester summary element outcome.
///
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The `passed` outcome.
    Passed {
        /// The result record appended to the output file.
        record: ResultRecord,
        /// The wall-clock duration of the invocation.
        elapsed: chrono::TimeDelta,
    },
    /// The `failed` outcome. The invocation did not produce a usable result.
    Failed {
        /// The error description.
        error: String,
    },
    /// The `skipped` outcome. The invocation is filtered out.
    Skipped,
}

impl Outcome {
    ///
    /// A shortcut constructor.
    ///
    pub fn passed(record: ResultRecord, elapsed: chrono::TimeDelta) -> Self {
        Self::Passed { record, elapsed }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failed<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self::Failed {
            error: error.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn skipped() -> Self {
        Self::Skipped
    }
}
