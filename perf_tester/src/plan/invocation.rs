//!
//! The concrete benchmark invocation.
//!

use std::sync::Arc;

use crate::options::flags;
use crate::options::Options;
use crate::suite::Suite;

///
/// The concrete benchmark invocation.
///
/// All sweeps are resolved: every option maps to exactly one value.
///
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The test short name.
    pub name: String,
    /// The suite running the invocation, shared between invocations.
    pub suite: Arc<Suite>,
    /// The main class for JVM suites, or the script path for the script suite.
    pub main_class_or_script: String,
    /// The native runtime options.
    pub runtime_options: Options,
    /// The application options.
    pub app_options: Options,
}

impl Invocation {
    ///
    /// Returns the native runtime flag tokens.
    ///
    pub fn runtime_flags(&self) -> Vec<String> {
        flags::runtime_flags(&self.runtime_options)
    }

    ///
    /// Returns the application flag tokens.
    ///
    pub fn app_flags(&self) -> Vec<String> {
        flags::app_flags(&self.app_options)
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.name,
            self.suite.name(),
            self.app_flags().join(" ")
        )
    }
}
