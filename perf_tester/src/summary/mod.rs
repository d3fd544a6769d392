//!
//! The performance tester summary.
//!

pub mod element;

use colored::Colorize;

use crate::result::ResultRecord;

use self::element::outcome::Outcome;
use self::element::Element;

///
/// The performance tester summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// The output verbosity.
    verbosity: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The passed invocations counter.
    passed: usize,
    /// The failed invocations counter.
    failed: usize,
    /// The skipped invocations counter.
    skipped: usize,
}

impl Summary {
    /// The elements vector default capacity.
    pub const ELEMENTS_INITIAL_CAPACITY: usize = 1024;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbosity: bool, quiet: bool) -> Self {
        Self {
            elements: Vec::with_capacity(Self::ELEMENTS_INITIAL_CAPACITY),
            verbosity,
            quiet,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    ///
    /// Whether the run has been successful.
    ///
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    ///
    /// Returns the elements in execution order.
    ///
    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    ///
    /// Returns the number of passed invocations.
    ///
    pub fn passed_count(&self) -> usize {
        self.passed
    }

    ///
    /// Returns the number of failed invocations.
    ///
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    ///
    /// Returns the number of skipped invocations.
    ///
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    ///
    /// Adds a passed outcome.
    ///
    pub fn passed(
        &mut self,
        build: &str,
        name: String,
        record: ResultRecord,
        elapsed: chrono::TimeDelta,
    ) {
        let element = Element::new(build.to_owned(), name, Outcome::passed(record, elapsed));
        self.push_element(element);
    }

    ///
    /// Adds a failed outcome.
    ///
    pub fn failed<S>(&mut self, build: &str, name: String, error: S)
    where
        S: ToString,
    {
        let element = Element::new(build.to_owned(), name, Outcome::failed(error));
        self.push_element(element);
    }

    ///
    /// Adds a skipped outcome.
    ///
    pub fn skipped(&mut self, build: &str, name: String) {
        let element = Element::new(build.to_owned(), name, Outcome::skipped());
        self.push_element(element);
    }

    ///
    /// Pushes an element to the summary, printing it.
    ///
    fn push_element(&mut self, element: Element) {
        if !self.quiet {
            if let Some(string) = element.print(self.verbosity) {
                println!("{string}");
            }
        }

        match element.outcome {
            Outcome::Passed { .. } => self.passed += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }

        self.elements.push(element);
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔══════════════════════╡ BENCHMARKING ╞════════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "PASSED".green(),
            self.passed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "SKIPPED".bright_black(),
            self.skipped.to_string().bright_black(),
        )?;
        writeln!(
            f,
            "║               {:10} INVOCATIONS                         ║",
            self.passed + self.failed,
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Summary;
    use crate::result::Body;
    use crate::result::ResultRecord;

    #[test]
    fn counters() {
        let mut summary = Summary::new(false, true);
        summary.passed(
            "default",
            "count".to_owned(),
            ResultRecord::new("count".to_owned(), &[], Body::Failed),
            chrono::TimeDelta::milliseconds(1500),
        );
        summary.skipped("default", "sort".to_owned());
        assert!(summary.is_successful());

        summary.failed("default", "sum".to_owned(), "Test `sum` failed");
        assert!(!summary.is_successful());
        assert_eq!(summary.passed_count(), 1);
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(summary.skipped_count(), 1);
        assert_eq!(summary.elements().len(), 3);
    }

    #[test]
    fn quiet_display() {
        let summary = Summary::new(false, true);
        assert!(summary.to_string().is_empty());
    }
}
