//!
//! The invocation failure policy.
//!

///
/// What the runner does when a single invocation fails.
///
/// Build and cluster failures abort the run regardless of the policy.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failed invocation.
    #[default]
    Abort,
    /// Record the failure and go on with the rest of the plan.
    Continue,
}

impl std::str::FromStr for FailurePolicy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "abort" => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            string => anyhow::bail!(
                "Unknown failure policy `{string}`. Supported policies: {}, {}",
                Self::Abort,
                Self::Continue,
            ),
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Continue => write!(f, "continue"),
        }
    }
}
