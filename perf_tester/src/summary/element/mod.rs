//!
//! The performance tester summary element.
//!

pub mod outcome;

use colored::Colorize;

use self::outcome::Outcome;

///
/// The performance tester summary element.
///
#[derive(Debug, Clone)]
pub struct Element {
    /// The Spark build the invocation ran against.
    pub build: String,
    /// The invocation description.
    pub name: String,
    /// The invocation outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(build: String, name: String, outcome: Outcome) -> Self {
        Self {
            build,
            name,
            outcome,
        }
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self, verbosity: bool) -> Option<String> {
        match self.outcome {
            Outcome::Skipped if !verbosity => return None,
            _ => {}
        }

        let outcome = match self.outcome {
            Outcome::Passed { .. } => "PASSED".green(),
            Outcome::Failed { .. } => "FAILED".bright_red(),
            Outcome::Skipped => "SKIPPED".bright_black(),
        };

        let details = match self.outcome {
            Outcome::Passed {
                ref record,
                ref elapsed,
            } => format!(
                "({}, {}.{:03}s)",
                record.body_summary().bright_white(),
                elapsed.num_seconds(),
                elapsed.num_milliseconds() % 1000,
            ),
            Outcome::Failed { ref error } => error.to_owned(),
            Outcome::Skipped => String::new(),
        };

        Some(format!(
            "{:16} {:>7} {} {}",
            self.build.bright_white(),
            outcome,
            self.name,
            details
        ))
    }
}
