//!
//! The PySpark tests suite.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::cluster::Cluster;

///
/// The PySpark tests suite.
///
/// The scripts are interpreted, so there is nothing to build.
///
#[derive(Debug, Clone)]
pub struct PythonTests {
    /// The directory with the test scripts.
    pub scripts_directory: PathBuf,
}

impl PythonTests {
    /// The suite name.
    pub const NAME: &'static str = "pyspark-tests";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(scripts_directory: &Path) -> Self {
        Self {
            scripts_directory: scripts_directory.to_owned(),
        }
    }

    ///
    /// Returns the `spark-submit` command running the script.
    ///
    pub fn submit_command(
        &self,
        cluster: &dyn Cluster,
        script: &str,
        app_flags: &[String],
    ) -> String {
        [
            cluster
                .spark_home()
                .join("bin/spark-submit")
                .to_string_lossy()
                .into_owned(),
            "--master".to_owned(),
            cluster.url().to_owned(),
            self.scripts_directory
                .join(script)
                .to_string_lossy()
                .into_owned(),
        ]
        .into_iter()
        .chain(app_flags.iter().cloned())
        .collect::<Vec<String>>()
        .join(" ")
    }
}
