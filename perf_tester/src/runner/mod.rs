//!
//! The test runner.
//!

pub mod failure_policy;


use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use crate::cluster::Cluster;
use crate::error::Error;
use crate::filters::Filters;
use crate::plan::invocation::Invocation;
use crate::plan::TestPlan;
use crate::result::Body;
use crate::result::ResultRecord;
use crate::suite::settings::Settings;
use crate::summary::Summary;
use crate::utils::timer::Timer;

use self::failure_policy::FailurePolicy;

///
/// The test runner.
///
/// Owns the cluster lifecycle of one run: the cluster is restarted once before the plan
/// and stopped after it on every exit path.
///
#[derive(Debug, Clone)]
pub struct TestRunner {
    /// The suite run settings.
    pub settings: Settings,
    /// The file every result record is appended to.
    pub output_file: PathBuf,
    /// What to do when a single invocation fails.
    pub failure_policy: FailurePolicy,
    /// The delay after stopping and after starting the cluster.
    pub grace_period: Duration,
    /// The invocation filters.
    pub filters: Filters,
}

impl TestRunner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        settings: Settings,
        output_file: PathBuf,
        failure_policy: FailurePolicy,
        grace_period: Duration,
        filters: Filters,
    ) -> Self {
        Self {
            settings,
            output_file,
            failure_policy,
            grace_period,
            filters,
        }
    }

    ///
    /// Runs the plan against the cluster, recording the outcomes in the summary.
    ///
    /// The first error wins: a failure to stop the cluster at the end is only reported
    /// if everything before it has succeeded.
    ///
    pub fn run(
        &self,
        plan: &TestPlan,
        cluster: &mut dyn Cluster,
        build: &str,
        summary: &mut Summary,
    ) -> Result<(), Error> {
        let result = self.run_plan(plan, cluster, build, summary);

        self.stage("Stopping", "the cluster");
        let stopped = cluster
            .stop()
            .map_err(|error| Error::cluster("stop", error));

        result.and(stopped)
    }

    ///
    /// Restarts the cluster and runs the invocations in plan order.
    ///
    fn run_plan(
        &self,
        plan: &TestPlan,
        cluster: &mut dyn Cluster,
        build: &str,
        summary: &mut Summary,
    ) -> Result<(), Error> {
        self.stage("Stopping", "the cluster left from an earlier run");
        if let Err(error) = cluster.stop() {
            self.warning(format!("the cluster could not be stopped: {error:#}").as_str());
        }
        cluster
            .ensure_stopped_on_workers()
            .map_err(|error| Error::cluster("ensure stopped on workers", error))?;
        std::thread::sleep(self.grace_period);

        self.stage("Syncing", "the Spark installation to the workers");
        cluster
            .sync()
            .map_err(|error| Error::cluster("sync", error))?;

        self.stage("Starting", "the cluster");
        cluster
            .start()
            .map_err(|error| Error::cluster("start", error))?;
        std::thread::sleep(self.grace_period);

        self.stage("Running", format!("{} tests", plan.len()).as_str());
        for invocation in plan.invocations().iter() {
            if !self.filters.check_name(invocation.name.as_str()) {
                summary.skipped(build, invocation.to_string());
                continue;
            }

            if !invocation.suite.is_built() {
                self.stage("Building", invocation.suite.name());
                invocation.suite.build()?;
            }

            let timer = Timer::started();
            match invocation.suite.run_test(&*cluster, invocation, &self.settings) {
                Ok(execution) => {
                    self.append(execution.record.to_string().as_str())?;
                    let elapsed = timer
                        .elapsed()
                        .unwrap_or_else(|_| chrono::TimeDelta::zero());
                    summary.passed(build, invocation.to_string(), execution.record, elapsed);
                }
                Err(error) if error.is_invocation_scoped() => {
                    self.append(Self::failed_record(invocation, &error).as_str())?;
                    summary.failed(build, invocation.to_string(), &error);
                    if let FailurePolicy::Abort = self.failure_policy {
                        return Err(error);
                    }
                }
                Err(error) => {
                    summary.failed(build, invocation.to_string(), &error);
                    return Err(error);
                }
            }
        }

        Ok(())
    }

    ///
    /// Returns the rendered record of the failed invocation.
    ///
    fn failed_record(invocation: &Invocation, error: &Error) -> String {
        match error {
            Error::TestFailed { record, .. } => record.to_owned(),
            _ => ResultRecord::new(
                invocation.name.clone(),
                invocation.app_flags().as_slice(),
                Body::Failed,
            )
            .to_string(),
        }
    }

    ///
    /// Appends the rendered record to the output file.
    ///
    fn append(&self, record: &str) -> Result<(), Error> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.output_file.as_path())
            .map_err(|error| Error::io("Output file opening", self.output_file.as_path(), error))?;
        writeln!(file, "{record}")
            .map_err(|error| Error::io("Output file writing", self.output_file.as_path(), error))
    }

    ///
    /// Prints a progress stage line.
    ///
    fn stage(&self, verb: &str, message: &str) {
        if self.settings.quiet {
            return;
        }
        println!("{} {message}", format!("{verb:>12}").bright_green().bold());
    }

    ///
    /// Prints a warning line.
    ///
    fn warning(&self, message: &str) {
        if self.settings.quiet {
            return;
        }
        println!("{} {message}", format!("{:>12}", "Warning").bright_yellow().bold());
    }
}
