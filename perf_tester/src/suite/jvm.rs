//!
//! The JVM suite assembly.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::cluster::Cluster;
use crate::commands;
use crate::error::Error;

///
/// The JVM suite assembly.
///
/// The suite is an sbt module producing one assembly jar submitted with `--class`.
///
#[derive(Debug, Clone)]
pub struct Assembly {
    /// The sbt module directory.
    pub module_directory: PathBuf,
    /// The assembly jar produced by the build.
    pub jar_path: PathBuf,
    /// The sbt launcher, relative to the module directory.
    pub sbt_command: String,
}

impl Assembly {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(project_directory: &Path, module: &str, jar_name: &str, sbt_command: &str) -> Self {
        let module_directory = project_directory.join(module);
        let jar_path = module_directory.join("target").join(jar_name);
        Self {
            module_directory,
            jar_path,
            sbt_command: sbt_command.to_owned(),
        }
    }

    ///
    /// Whether the assembly jar exists.
    ///
    pub fn is_built(&self) -> bool {
        self.jar_path.is_file()
    }

    ///
    /// Builds the assembly jar from scratch.
    ///
    pub fn build(&self, suite: &str) -> Result<(), Error> {
        let command = format!("{} clean assembly", self.sbt_command);
        commands::run_in(self.module_directory.as_path(), command.as_str()).map_err(|error| {
            Error::Build {
                suite: suite.to_owned(),
                message: format!("{error:#}"),
            }
        })?;

        if !self.is_built() {
            return Err(Error::Build {
                suite: suite.to_owned(),
                message: format!("the assembly jar {:?} has not been produced", self.jar_path),
            });
        }
        Ok(())
    }

    ///
    /// Checks that the assembly jar exists before submitting it.
    ///
    pub fn check(&self, suite: &str) -> Result<(), Error> {
        if self.is_built() {
            Ok(())
        } else {
            Err(Error::Build {
                suite: suite.to_owned(),
                message: format!("test jar {:?} not found", self.jar_path),
            })
        }
    }

    ///
    /// Returns the `spark-submit` command running the main class from the jar.
    ///
    pub fn submit_command(
        &self,
        cluster: &dyn Cluster,
        main_class: &str,
        app_flags: &[String],
    ) -> String {
        [
            cluster
                .spark_home()
                .join("bin/spark-submit")
                .to_string_lossy()
                .into_owned(),
            "--class".to_owned(),
            main_class.to_owned(),
            "--master".to_owned(),
            cluster.url().to_owned(),
            "--driver-memory".to_owned(),
            cluster.driver_memory().to_owned(),
            self.jar_path.to_string_lossy().into_owned(),
        ]
        .into_iter()
        .chain(app_flags.iter().cloned())
        .collect::<Vec<String>>()
        .join(" ")
    }
}
