//!
//! The Spark source build manager.
//!

use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;

use crate::commands;

///
/// The Spark source build manager.
///
/// Every build lives in its own checkout under the root directory, so repeated runs only
/// fetch and rebuild.
///
#[derive(Debug, Clone)]
pub struct SparkBuildManager {
    /// The directory with the checkouts.
    root: PathBuf,
    /// The repository to clone from.
    git_repo: String,
    /// Whether to merge the commit into `master` instead of checking it out.
    merge_commit_into_master: bool,
    /// The configuration directory copied into every build.
    conf_dir: PathBuf,
    /// Whether to print the build stages.
    quiet: bool,
}

impl SparkBuildManager {
    /// The Spark build command, relative to the checkout.
    pub const SBT_BUILD_COMMAND: &'static str = "sbt/sbt clean assembly/assembly";

    /// The tools a build runs.
    pub const REQUIRED_EXECUTABLES: [&'static str; 2] = ["git", "sh"];

    /// The configuration files a build cannot run without.
    pub const REQUIRED_CONFIGURATION_FILES: [&'static str; 2] = ["spark-env.sh", "slaves"];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        root: PathBuf,
        git_repo: String,
        merge_commit_into_master: bool,
        conf_dir: PathBuf,
        quiet: bool,
    ) -> Self {
        Self {
            root,
            git_repo,
            merge_commit_into_master,
            conf_dir,
            quiet,
        }
    }

    ///
    /// Returns the checkout directory of the commit.
    ///
    /// Accepts commit hashes, branches like `origin/branch-1.0`, tags like `origin/tag/v1.0.0`
    /// and pull requests like `origin/pr/675`.
    ///
    pub fn checkout_directory(&self, commit_id: &str) -> PathBuf {
        self.root.join(commit_id.replace('/', "_"))
    }

    ///
    /// Checks out, builds and configures the commit, returning the Spark home of the build.
    ///
    pub fn build(&self, commit_id: &str) -> anyhow::Result<PathBuf> {
        self.check_configuration()?;
        commands::check_executables(&Self::REQUIRED_EXECUTABLES)?;
        let target = self.checkout_directory(commit_id);

        if !target.is_dir() {
            self.stage("Cloning", format!("Spark from {}", self.git_repo).as_str());
            std::fs::create_dir_all(self.root.as_path()).map_err(|error| {
                anyhow::anyhow!("Build directory {:?} creating: {error}", self.root)
            })?;
            commands::run(
                format!(
                    "git clone {} {}",
                    self.git_repo,
                    target.to_string_lossy()
                )
                .as_str(),
            )?;
            for refspec in [
                "+refs/pull/*/head:refs/remotes/origin/pr/*",
                "+refs/tags/*:refs/remotes/origin/tag/*",
            ] {
                commands::run_in(
                    target.as_path(),
                    format!("git config --add remote.origin.fetch '{refspec}'").as_str(),
                )?;
            }
        }

        self.stage("Updating", "the Spark repository");
        commands::run_in(target.as_path(), "git fetch")?;

        self.stage("Building", format!("Spark `{commit_id}`").as_str());
        commands::run_in(target.as_path(), "git clean -f -d -x")?;
        if self.merge_commit_into_master {
            commands::run_in(target.as_path(), "git reset --hard master")?;
            commands::run_in(
                target.as_path(),
                format!("git merge {commit_id} -m 'Merging {commit_id} into master.'").as_str(),
            )?;
        } else {
            commands::run_in(
                target.as_path(),
                format!("git reset --hard {commit_id}").as_str(),
            )?;
        }
        commands::run_in(target.as_path(), Self::SBT_BUILD_COMMAND)?;

        self.copy_configuration(target.as_path())?;
        Ok(target)
    }

    ///
    /// Checks that the configuration directory has everything a build needs.
    ///
    pub fn check_configuration(&self) -> anyhow::Result<()> {
        for file in Self::REQUIRED_CONFIGURATION_FILES.iter() {
            let path = self.conf_dir.join(file);
            if !path.is_file() {
                anyhow::bail!("Could not find required file {path:?}");
            }
        }
        Ok(())
    }

    ///
    /// Copies the configuration directory files into the build.
    ///
    pub fn copy_configuration(&self, target: &Path) -> anyhow::Result<()> {
        let destination = target.join("conf");
        std::fs::create_dir_all(destination.as_path())
            .map_err(|error| anyhow::anyhow!("Directory {destination:?} creating: {error}"))?;

        let entries = std::fs::read_dir(self.conf_dir.as_path())
            .map_err(|error| anyhow::anyhow!("Directory {:?} reading: {error}", self.conf_dir))?;
        for entry in entries {
            let entry = entry
                .map_err(|error| anyhow::anyhow!("Directory {:?} reading: {error}", self.conf_dir))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let copy = destination.join(entry.file_name());
            std::fs::copy(path.as_path(), copy.as_path())
                .map_err(|error| anyhow::anyhow!("File {path:?} copying to {copy:?}: {error}"))?;
        }
        Ok(())
    }

    fn stage(&self, verb: &str, message: &str) {
        if !self.quiet {
            println!("{} {message}", format!("{verb:>12}").bright_green().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::SparkBuildManager;

    fn manager(root: &Path, conf_dir: &Path) -> SparkBuildManager {
        SparkBuildManager::new(
            root.to_owned(),
            "https://github.com/apache/spark.git".to_owned(),
            false,
            conf_dir.to_owned(),
            true,
        )
    }

    #[test]
    fn checkout_directory() {
        let manager = manager(Path::new("/opt/spark_versions"), Path::new("/opt/conf"));
        assert_eq!(
            manager.checkout_directory("origin/pr/675"),
            Path::new("/opt/spark_versions/origin_pr_675")
        );
        assert_eq!(
            manager.checkout_directory("4af93ff3"),
            Path::new("/opt/spark_versions/4af93ff3")
        );
    }

    #[test]
    fn copy_configuration() {
        let directory = tempfile::tempdir().expect("Always valid");
        let conf = directory.path().join("conf-source");
        std::fs::create_dir_all(conf.as_path()).expect("Always valid");
        std::fs::write(conf.join("spark-env.sh"), "export SPARK_WORKER_MEMORY=4g\n")
            .expect("Always valid");
        std::fs::write(conf.join("slaves"), "worker-1\n").expect("Always valid");

        let manager = manager(directory.path(), conf.as_path());
        manager.check_configuration().expect("Always valid");

        let target = directory.path().join("build");
        manager
            .copy_configuration(target.as_path())
            .expect("Always valid");
        assert_eq!(
            std::fs::read_to_string(target.join("conf/slaves")).expect("Always valid"),
            "worker-1\n"
        );
        assert!(target.join("conf/spark-env.sh").is_file());
    }

    #[test]
    fn error_missing_configuration() {
        let directory = tempfile::tempdir().expect("Always valid");
        std::fs::write(directory.path().join("slaves"), "").expect("Always valid");
        let manager = manager(directory.path(), directory.path());
        let error = manager.check_configuration().expect_err("Always fails");
        assert!(error.to_string().contains("spark-env.sh"));
        assert!(manager.build("v1.0.0").is_err());
    }
}
