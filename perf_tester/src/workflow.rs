//!
//! The performance tester workflows.
//!

///
/// Describes sets of actions that the performance tester is able to perform.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Only build the test suites but not run them.
    BuildOnly,
    /// Build the test suites and run the plan.
    #[default]
    BuildAndRun,
}

impl std::str::FromStr for Workflow {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "build" => Ok(Self::BuildOnly),
            "run" => Ok(Self::BuildAndRun),
            string => anyhow::bail!(
                "Unknown workflow `{string}`. Supported workflows: {}",
                [Self::BuildOnly, Self::BuildAndRun]
                    .iter()
                    .map(|workflow| workflow.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuildOnly => write!(f, "build"),
            Self::BuildAndRun => write!(f, "run"),
        }
    }
}
