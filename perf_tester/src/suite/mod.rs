//!
//! The benchmark test suite.
//!

pub mod jvm;
pub mod mllib;
pub mod python;
pub mod settings;
pub mod spark;
pub mod streaming;

use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::cluster::Cluster;
use crate::error::Error;
use crate::plan::invocation::Invocation;
use crate::process::Launch;
use crate::process::Transcript;
use crate::result::ResultRecord;

use self::mllib::MLlibTests;
use self::python::PythonTests;
use self::settings::Settings;
use self::spark::SparkTests;
use self::streaming::StreamingTests;

///
/// The benchmark test suite.
///
/// The variants differ in how their artifact is built, how the process is submitted,
/// and how the output is reduced to a result record.
///
#[derive(Debug, Clone)]
pub enum Suite {
    /// The Spark core tests.
    Spark(SparkTests),
    /// The Spark Streaming tests.
    Streaming(StreamingTests),
    /// The MLlib tests.
    MLlib(MLlibTests),
    /// The PySpark tests.
    Python(PythonTests),
}

///
/// The finished invocation.
///
#[derive(Debug, Clone)]
pub struct Execution {
    /// The result record.
    pub record: ResultRecord,
    /// The benchmark process transcript.
    pub transcript: Transcript,
}

impl Suite {
    /// The environment variable carrying the native runtime flags.
    pub const RUNTIME_OPTIONS_VARIABLE: &'static str = "SPARK_SUBMIT_OPTS";

    /// The log header divider width.
    pub const DIVIDER_WIDTH: usize = 68;

    ///
    /// A shortcut constructor.
    ///
    pub fn spark(project_directory: &Path, sbt_command: &str) -> Self {
        Self::Spark(SparkTests::new(project_directory, sbt_command))
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn streaming(project_directory: &Path, sbt_command: &str) -> Self {
        Self::Streaming(StreamingTests::new(project_directory, sbt_command))
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn mllib(project_directory: &Path, sbt_command: &str) -> Self {
        Self::MLlib(MLlibTests::new(project_directory, sbt_command))
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn python(scripts_directory: &Path) -> Self {
        Self::Python(PythonTests::new(scripts_directory))
    }

    ///
    /// Returns the suite name.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spark(_) => SparkTests::NAME,
            Self::Streaming(_) => StreamingTests::NAME,
            Self::MLlib(_) => MLlibTests::NAME,
            Self::Python(_) => PythonTests::NAME,
        }
    }

    ///
    /// Whether the suite artifact is ready to be submitted.
    ///
    pub fn is_built(&self) -> bool {
        match self {
            Self::Spark(inner) => inner.assembly.is_built(),
            Self::Streaming(inner) => inner.assembly.is_built(),
            Self::MLlib(inner) => inner.assembly.is_built(),
            Self::Python(_) => true,
        }
    }

    ///
    /// Builds the suite artifact.
    ///
    pub fn build(&self) -> Result<(), Error> {
        match self {
            Self::Spark(inner) => inner.assembly.build(self.name()),
            Self::Streaming(inner) => inner.assembly.build(self.name()),
            Self::MLlib(inner) => inner.assembly.build(self.name()),
            Self::Python(_) => Ok(()),
        }
    }

    ///
    /// Returns the shell command submitting the invocation to the cluster.
    ///
    pub fn submit_command(
        &self,
        cluster: &dyn Cluster,
        main_class_or_script: &str,
        app_flags: &[String],
    ) -> String {
        match self {
            Self::Spark(inner) => {
                inner
                    .assembly
                    .submit_command(cluster, main_class_or_script, app_flags)
            }
            Self::Streaming(inner) => {
                inner
                    .assembly
                    .submit_command(cluster, main_class_or_script, app_flags)
            }
            Self::MLlib(inner) => {
                inner
                    .assembly
                    .submit_command(cluster, main_class_or_script, app_flags)
            }
            Self::Python(inner) => inner.submit_command(cluster, main_class_or_script, app_flags),
        }
    }

    ///
    /// Reduces the captured benchmark output to a result record.
    ///
    pub fn process_output(
        &self,
        short_name: &str,
        app_flags: &[String],
        stdout: &str,
        ignored_trials: usize,
    ) -> Result<ResultRecord, Error> {
        match self {
            Self::Spark(_) | Self::Python(_) => {
                SparkTests::process_output(short_name, app_flags, stdout, ignored_trials)
            }
            Self::Streaming(_) => Ok(StreamingTests::process_output(
                short_name, app_flags, stdout,
            )),
            Self::MLlib(_) => {
                MLlibTests::process_output(short_name, app_flags, stdout, ignored_trials)
            }
        }
    }

    ///
    /// Runs one invocation on the cluster and reduces its output.
    ///
    /// A record marked as failed is turned into an error, so the caller decides
    /// whether the run goes on.
    ///
    pub fn run_test(
        &self,
        cluster: &dyn Cluster,
        invocation: &Invocation,
        settings: &Settings,
    ) -> Result<Execution, Error> {
        match self {
            Self::Spark(inner) => inner.assembly.check(self.name())?,
            Self::Streaming(inner) => inner.assembly.check(self.name())?,
            Self::MLlib(inner) => inner.assembly.check(self.name())?,
            Self::Python(_) => {}
        }

        cluster
            .ensure_stopped_on_workers()
            .map_err(|error| Error::cluster("ensure stopped on workers", error))?;

        let runtime_flags = invocation.runtime_flags();
        let app_flags = invocation.app_flags();
        let stdout_log = settings.stdout_log(invocation.name.as_str());
        let stderr_log = settings.stderr_log(invocation.name.as_str());
        let header = Self::log_header(runtime_flags.as_slice(), app_flags.as_slice());
        for path in [stdout_log.as_path(), stderr_log.as_path()] {
            Self::append(path, header.as_str())?;
        }

        let command = self.submit_command(
            cluster,
            invocation.main_class_or_script.as_str(),
            app_flags.as_slice(),
        );
        if settings.verbose {
            println!("{} {}", "Command:".bright_white(), command);
        }

        let transcript = Launch {
            name: invocation.name.clone(),
            command,
            environment: vec![(
                Self::RUNTIME_OPTIONS_VARIABLE.to_owned(),
                runtime_flags.join(" "),
            )],
            stdout_log,
            stderr_log,
            timeout: settings.timeout,
            verbose: settings.verbose,
        }
        .run()?;
        if !transcript.success && !settings.quiet {
            println!(
                "{} test `{}` exited with a non-zero status",
                "Warning:".bright_yellow().bold(),
                invocation.name,
            );
        }

        let record = self.process_output(
            invocation.name.as_str(),
            app_flags.as_slice(),
            transcript.stdout.as_str(),
            settings.ignored_trials,
        )?;
        if record.is_failed() {
            return Err(Error::TestFailed {
                name: invocation.name.clone(),
                record: record.to_string(),
            });
        }

        Ok(Execution { record, transcript })
    }

    ///
    /// Returns the options header written to both logs before each invocation.
    ///
    fn log_header(runtime_flags: &[String], app_flags: &[String]) -> String {
        let divider = "-".repeat(Self::DIVIDER_WIDTH);
        format!(
            "{divider}\nJava options: {}\nOptions: {}\n{divider}\n",
            runtime_flags.join(" "),
            app_flags.join(" "),
        )
    }

    ///
    /// Appends the text to the log, creating it if necessary.
    ///
    fn append(path: &Path, text: &str) -> Result<(), Error> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| Error::io("Log opening", path, error))?;
        file.write_all(text.as_bytes())
            .map_err(|error| Error::io("Log writing", path, error))
    }
}
