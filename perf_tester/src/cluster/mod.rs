//!
//! The Spark cluster collaborator.
//!

pub mod standalone;

use std::path::Path;

///
/// The Spark cluster collaborator.
///
/// The harness only needs the submit coordinates and the lifecycle controls.
/// Every control is blocking and reports failures as they are.
///
pub trait Cluster {
    ///
    /// Returns the Spark installation directory.
    ///
    fn spark_home(&self) -> &Path;

    ///
    /// Returns the master URL.
    ///
    fn url(&self) -> &str;

    ///
    /// Returns the driver memory setting, e.g. `1g`.
    ///
    fn driver_memory(&self) -> &str;

    ///
    /// Starts the master and the workers.
    ///
    fn start(&mut self) -> anyhow::Result<()>;

    ///
    /// Stops the master and the workers.
    ///
    fn stop(&mut self) -> anyhow::Result<()>;

    ///
    /// Waits until no executor process remains on any worker.
    ///
    fn ensure_stopped_on_workers(&self) -> anyhow::Result<()>;

    ///
    /// Copies the Spark installation to all workers.
    ///
    fn sync(&mut self) -> anyhow::Result<()>;
}
