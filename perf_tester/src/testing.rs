//!
//! The unit test fixtures.
//!

use std::cell::RefCell;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::cluster::Cluster;
use crate::suite::settings::Settings;

///
/// The recorded cluster operation.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `start`
    Start,
    /// `stop`
    Stop,
    /// `ensure_stopped_on_workers`
    EnsureStopped,
    /// `sync`
    Sync,
}

///
/// The in-memory cluster recording every lifecycle call.
///
#[derive(Debug)]
pub struct RecordingCluster {
    /// The Spark installation directory with an optional fake `bin/spark-submit`.
    spark_home: PathBuf,
    /// The recorded operations.
    operations: RefCell<Vec<Operation>>,
    /// The operation which fails after being recorded.
    failing: Option<Operation>,
}

impl RecordingCluster {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(spark_home: &Path) -> Self {
        Self {
            spark_home: spark_home.to_owned(),
            operations: RefCell::new(Vec::new()),
            failing: None,
        }
    }

    ///
    /// Creates the cluster with a fake `bin/spark-submit` running the shell snippet.
    ///
    pub fn with_submit_script(spark_home: &Path, body: &str) -> Self {
        let bin = spark_home.join("bin");
        std::fs::create_dir_all(bin.as_path()).expect("Always valid");
        let path = bin.join("spark-submit");
        std::fs::write(path.as_path(), format!("#!/bin/sh\n{body}\n")).expect("Always valid");
        std::fs::set_permissions(path.as_path(), std::fs::Permissions::from_mode(0o755))
            .expect("Always valid");
        Self::new(spark_home)
    }

    ///
    /// Makes the operation fail.
    ///
    pub fn failing_on(mut self, operation: Operation) -> Self {
        self.failing = Some(operation);
        self
    }

    ///
    /// Returns the recorded operations.
    ///
    pub fn operations(&self) -> Vec<Operation> {
        self.operations.borrow().clone()
    }

    fn record(&self, operation: Operation) -> anyhow::Result<()> {
        self.operations.borrow_mut().push(operation);
        if self.failing == Some(operation) {
            anyhow::bail!("{operation:?} has failed");
        }
        Ok(())
    }
}

impl Cluster for RecordingCluster {
    fn spark_home(&self) -> &Path {
        self.spark_home.as_path()
    }

    fn url(&self) -> &str {
        "spark://localhost:7077"
    }

    fn driver_memory(&self) -> &str {
        "1g"
    }

    fn start(&mut self) -> anyhow::Result<()> {
        self.record(Operation::Start)
    }

    fn stop(&mut self) -> anyhow::Result<()> {
        self.record(Operation::Stop)
    }

    fn ensure_stopped_on_workers(&self) -> anyhow::Result<()> {
        self.record(Operation::EnsureStopped)
    }

    fn sync(&mut self) -> anyhow::Result<()> {
        self.record(Operation::Sync)
    }
}

///
/// Returns quiet settings logging into the directory.
///
pub fn settings(log_directory: &Path) -> Settings {
    Settings {
        log_directory: log_directory.to_owned(),
        ignored_trials: 0,
        timeout: Some(Duration::from_secs(30)),
        verbose: false,
        quiet: true,
    }
}
