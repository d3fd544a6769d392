//!
//! The standalone Spark cluster.
//!

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use crate::commands;

use super::Cluster;

///
/// The standalone Spark cluster, controlled with the `sbin` scripts of its installation.
///
/// The workers are listed in the `slaves` file of the configuration directory.
///
#[derive(Debug, Clone)]
pub struct StandaloneCluster {
    /// The Spark installation directory.
    spark_home: PathBuf,
    /// The master URL.
    url: String,
    /// The driver memory setting.
    driver_memory: String,
    /// The configuration directory.
    conf_dir: PathBuf,
    /// The delay between two worker probes.
    poll_interval: Duration,
    /// The number of worker probes before giving up.
    poll_attempts: usize,
    /// Whether to print the worker probes.
    verbose: bool,
}

impl StandaloneCluster {
    /// The workers list file name.
    pub const WORKERS_FILE_NAME: &'static str = "slaves";

    /// The tools reaching the workers while probing them.
    pub const PROBE_EXECUTABLES: [&'static str; 1] = ["ssh"];

    /// The tools copying the installation to the workers.
    pub const SYNC_EXECUTABLES: [&'static str; 2] = ["rsync", "ssh"];

    /// The remote probe succeeding while an executor is alive.
    pub const EXECUTOR_PROBE: &'static str = "jps | grep ExecutorBackend";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        spark_home: PathBuf,
        url: String,
        driver_memory: String,
        conf_dir: PathBuf,
        poll_interval: Duration,
        poll_attempts: usize,
        verbose: bool,
    ) -> Self {
        Self {
            spark_home,
            url,
            driver_memory,
            conf_dir,
            poll_interval,
            poll_attempts,
            verbose,
        }
    }

    ///
    /// Reads the worker hosts.
    ///
    /// Blank lines and `#` comments are skipped. A missing file means a single-node cluster.
    ///
    pub fn workers(&self) -> anyhow::Result<Vec<String>> {
        let path = self.conf_dir.join(Self::WORKERS_FILE_NAME);
        if !path.exists() {
            return Ok(vec![]);
        }
        let workers = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Workers file {path:?} reading error: {error}"))?
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_owned())
            .collect();
        Ok(workers)
    }

    ///
    /// Runs one of the `sbin` control scripts.
    ///
    fn control(&self, script: &str) -> anyhow::Result<()> {
        let command = format!(
            "SPARK_CONF_DIR={} {}",
            self.conf_dir.to_string_lossy(),
            self.spark_home.join("sbin").join(script).to_string_lossy(),
        );
        commands::run(command.as_str())?;
        Ok(())
    }

    ///
    /// Polls the worker until its executors are gone.
    ///
    fn wait_for_worker(&self, worker: &str) -> anyhow::Result<()> {
        for attempt in 1..=self.poll_attempts {
            let output = commands::run_remote(worker, Self::EXECUTOR_PROBE)?;
            if !output.is_success() {
                return Ok(());
            }
            if self.verbose {
                println!(
                    "     {} executors on `{worker}` are still running, attempt {attempt}/{}",
                    "Waiting".bright_yellow().bold(),
                    self.poll_attempts,
                );
            }
            std::thread::sleep(self.poll_interval);
        }
        anyhow::bail!(
            "Executors on `{worker}` are still running after {} probes",
            self.poll_attempts
        )
    }
}

impl Cluster for StandaloneCluster {
    fn spark_home(&self) -> &Path {
        self.spark_home.as_path()
    }

    fn url(&self) -> &str {
        self.url.as_str()
    }

    fn driver_memory(&self) -> &str {
        self.driver_memory.as_str()
    }

    fn start(&mut self) -> anyhow::Result<()> {
        self.control("start-all.sh")
    }

    fn stop(&mut self) -> anyhow::Result<()> {
        self.control("stop-all.sh")
    }

    fn ensure_stopped_on_workers(&self) -> anyhow::Result<()> {
        let workers = self.workers()?;
        if !workers.is_empty() {
            commands::check_executables(&Self::PROBE_EXECUTABLES)?;
        }
        for worker in workers.iter() {
            self.wait_for_worker(worker.as_str())?;
        }
        Ok(())
    }

    fn sync(&mut self) -> anyhow::Result<()> {
        let workers = self.workers()?;
        if !workers.is_empty() {
            commands::check_executables(&Self::SYNC_EXECUTABLES)?;
        }
        let source = format!("{}/", self.spark_home.to_string_lossy());
        for worker in workers.iter() {
            let command = format!(
                "rsync -e 'ssh -o StrictHostKeyChecking=no -o BatchMode=yes' -az --delete {source} {worker}:{}",
                self.spark_home.to_string_lossy(),
            );
            commands::run(command.as_str())?;
        }
        Ok(())
    }
}
