//!
//! The shell command utilities.
//!

use std::path::Path;

///
/// The finished command output.
///
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// The captured stdout.
    pub stdout: String,
    /// The captured stderr.
    pub stderr: String,
    /// The exit code, `None` if the process was terminated by a signal.
    pub status: Option<i32>,
}

impl CommandOutput {
    ///
    /// Whether the command exited successfully.
    ///
    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }
}

///
/// Checks that the executables are available in `${PATH}` before any of them is run.
///
pub fn check_executables(executables: &[&str]) -> anyhow::Result<()> {
    for executable in executables.iter() {
        if let Err(error) = which::which(executable) {
            anyhow::bail!("The `{executable}` executable not found in ${{PATH}}: {error}");
        }
    }
    Ok(())
}

///
/// Runs the shell command, capturing its output regardless of the exit status.
///
pub fn output(command: &str, directory: Option<&Path>) -> anyhow::Result<CommandOutput> {
    let mut process = std::process::Command::new("sh");
    process.arg("-c").arg(command);
    process.stdin(std::process::Stdio::null());
    if let Some(directory) = directory {
        process.current_dir(directory);
    }

    let output = process
        .output()
        .map_err(|error| anyhow::anyhow!("`{command}` subprocess spawning error: {error:?}"))?;
    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(output.stdout.as_slice()).to_string(),
        stderr: String::from_utf8_lossy(output.stderr.as_slice()).to_string(),
        status: output.status.code(),
    })
}

///
/// Runs the shell command, failing on a non-zero exit status.
///
pub fn run(command: &str) -> anyhow::Result<CommandOutput> {
    checked(command, output(command, None)?)
}

///
/// Runs the shell command in the directory, failing on a non-zero exit status.
///
pub fn run_in(directory: &Path, command: &str) -> anyhow::Result<CommandOutput> {
    if !directory.is_dir() {
        anyhow::bail!("Directory {directory:?} does not exist");
    }
    checked(command, output(command, Some(directory))?)
}

///
/// Runs the command on the remote host over SSH.
///
/// The exit status is reported as is, since remote probes use it as an answer.
///
pub fn run_remote(host: &str, command: &str) -> anyhow::Result<CommandOutput> {
    let quoted = command.replace('\'', r"'\''");
    output(
        format!("ssh -o StrictHostKeyChecking=no -o BatchMode=yes {host} '{quoted}'").as_str(),
        None,
    )
}

fn checked(command: &str, output: CommandOutput) -> anyhow::Result<CommandOutput> {
    if !output.is_success() {
        anyhow::bail!(
            "`{command}` exited with {}: {}",
            output
                .status
                .map(|code| format!("code {code}"))
                .unwrap_or_else(|| "a signal".to_owned()),
            output.stderr.trim(),
        );
    }
    Ok(output)
}
