//!
//! The benchmark process launch.
//!

pub mod protocol;

use std::fs::File;
use std::io::BufRead;
use std::io::Write;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::path::PathBuf;
use std::process::Child;
use std::process::ExitStatus;
use std::sync::mpsc;
use std::time::Duration;
use std::time::Instant;

use colored::Colorize;

use crate::error::Error;

use self::protocol::Event;
use self::protocol::Protocol;
use self::protocol::Violation;

///
/// The benchmark process launch description.
///
/// Everything the child needs is passed explicitly, so sequential launches never share state
/// through the harness process environment.
///
#[derive(Debug, Clone)]
pub struct Launch {
    /// The test short name, used in diagnostics.
    pub name: String,
    /// The shell command.
    pub command: String,
    /// The extra environment variables of the child.
    pub environment: Vec<(String, String)>,
    /// The stdout log, appended with every line read from the child.
    pub stdout_log: PathBuf,
    /// The stderr log, receiving the child stderr directly.
    pub stderr_log: PathBuf,
    /// The time limit for the whole process, unlimited if `None`.
    pub timeout: Option<Duration>,
    /// Whether to print the environment and trial records.
    pub verbose: bool,
}

///
/// The finished benchmark process output.
///
#[derive(Debug, Clone)]
pub struct Transcript {
    /// The environment description from the first line.
    pub environment: serde_json::Value,
    /// The trial result records.
    pub records: Vec<serde_json::Value>,
    /// The complete captured stdout.
    pub stdout: String,
    /// Whether the process exited successfully.
    pub success: bool,
}

impl Launch {
    /// The child status polling interval after its stdout has been closed.
    const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

    ///
    /// Runs the process to completion, enforcing the output protocol.
    ///
    /// The child and its process group are killed on every error, including a protocol
    /// violation and an expired timeout.
    ///
    pub fn run(self) -> Result<Transcript, Error> {
        let stdout_log = Self::open_log(&self.stdout_log)?;
        let stderr_log = Self::open_log(&self.stderr_log)?;

        let mut child = std::process::Command::new("sh")
            .arg("-c")
            .arg(self.command.as_str())
            .envs(self.environment.iter().map(|(key, value)| (key, value)))
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::from(stderr_log))
            .process_group(0)
            .spawn()
            .map_err(|error| Error::io("Benchmark process spawning", "sh", error))?;

        let result = self.supervise(&mut child, stdout_log);
        if result.is_err() {
            Self::kill(&mut child);
        }
        result
    }

    ///
    /// Reads the child output until it is closed and waits for the child exit.
    ///
    fn supervise(&self, child: &mut Child, mut stdout_log: File) -> Result<Transcript, Error> {
        let stdout = child.stdout.take().ok_or_else(|| {
            Error::io(
                "Benchmark process stdout",
                "sh",
                std::io::ErrorKind::BrokenPipe.into(),
            )
        })?;

        let (sender, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            let mut reader = std::io::BufReader::new(stdout);
            loop {
                let mut line = Vec::new();
                match reader.read_until(b'\n', &mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        if sender.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        let _ = sender.send(Err(error));
                        break;
                    }
                }
            }
        });

        let started = Instant::now();
        let mut protocol = Protocol::default();
        let mut captured = String::new();
        loop {
            let line = match self.timeout {
                Some(timeout) => {
                    let remaining = timeout.saturating_sub(started.elapsed());
                    match receiver.recv_timeout(remaining) {
                        Ok(line) => line,
                        Err(mpsc::RecvTimeoutError::Timeout) => {
                            return Err(self.timed_out(timeout));
                        }
                        Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    }
                }
                None => match receiver.recv() {
                    Ok(line) => line,
                    Err(mpsc::RecvError) => break,
                },
            };
            let line =
                line.map_err(|error| Error::io("Benchmark output reading", "stdout", error))?;
            let line = match protocol.decode(line) {
                Ok(line) => line,
                Err(violation) => return Err(self.violation(violation)),
            };

            writeln!(stdout_log, "{line}")
                .map_err(|error| Error::io("Log writing", self.stdout_log.as_path(), error))?;
            captured.push_str(line.as_str());
            captured.push('\n');

            match protocol.feed(line.as_str()) {
                Ok(Event::Environment(environment)) if self.verbose => {
                    println!(
                        "{} {}",
                        "Test environment:".bright_white(),
                        serde_json::to_string_pretty(environment).expect("Always valid")
                    );
                }
                Ok(Event::Record(record)) if self.verbose => {
                    println!(
                        "{} {}",
                        "Result:".bright_white(),
                        serde_json::to_string_pretty(record).expect("Always valid")
                    );
                }
                Ok(_) => {}
                Err(violation) => return Err(self.violation(violation)),
            }
        }

        let status = self.wait(child, started)?;
        let (environment, records) = protocol
            .finish()
            .map_err(|violation| self.violation(violation))?;

        Ok(Transcript {
            environment,
            records,
            stdout: captured,
            success: status.success(),
        })
    }

    ///
    /// Waits for the child exit within what is left of the timeout.
    ///
    fn wait(&self, child: &mut Child, started: Instant) -> Result<ExitStatus, Error> {
        let timeout = match self.timeout {
            Some(timeout) => timeout,
            None => {
                return child
                    .wait()
                    .map_err(|error| Error::io("Benchmark process waiting", "sh", error))
            }
        };

        loop {
            if let Some(status) = child
                .try_wait()
                .map_err(|error| Error::io("Benchmark process waiting", "sh", error))?
            {
                return Ok(status);
            }
            let remaining = timeout.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                return Err(self.timed_out(timeout));
            }
            std::thread::sleep(remaining.min(Self::WAIT_POLL_INTERVAL));
        }
    }

    ///
    /// Opens a log file for appending.
    ///
    fn open_log(path: &Path) -> Result<File, Error> {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| Error::io("Log opening", path, error))
    }

    fn violation(&self, violation: Violation) -> Error {
        Error::ProtocolViolation {
            name: self.name.clone(),
            line: violation.line,
            message: violation.message,
        }
    }

    fn timed_out(&self, timeout: Duration) -> Error {
        Error::Timeout {
            name: self.name.clone(),
            timeout,
        }
    }

    ///
    /// Kills the child process group and reaps the child.
    ///
    /// The reader thread is left to finish on its own.
    ///
    fn kill(child: &mut Child) {
        let _ = std::process::Command::new("kill")
            .args(["-KILL", "--", format!("-{}", child.id()).as_str()])
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status();
        let _ = child.kill();
        let _ = child.wait();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use std::time::Instant;

    use super::Launch;
    use crate::error::Error;

    fn launch(directory: &std::path::Path, command: &str) -> Launch {
        Launch {
            name: "test".to_owned(),
            command: command.to_owned(),
            environment: vec![],
            stdout_log: directory.join("test.out"),
            stderr_log: directory.join("test.err"),
            timeout: None,
            verbose: false,
        }
    }

    #[test]
    fn transcript() {
        let directory = tempfile::tempdir().expect("Always valid");
        let transcript = launch(
            directory.path(),
            r#"echo '{"env":"x"}'; echo '{"result":1}'; echo; echo 'results: 10,20,30'; echo oops >&2"#,
        )
        .run()
        .expect("Always valid");

        assert_eq!(transcript.environment, serde_json::json!({ "env": "x" }));
        assert_eq!(transcript.records.len(), 1);
        assert!(transcript.stdout.contains("results: 10,20,30"));
        assert!(transcript.success);

        let stdout_log =
            std::fs::read_to_string(directory.path().join("test.out")).expect("Always valid");
        assert!(stdout_log.contains("results: 10,20,30"));
        let stderr_log =
            std::fs::read_to_string(directory.path().join("test.err")).expect("Always valid");
        assert_eq!(stderr_log, "oops\n");
    }

    #[test]
    fn explicit_environment() {
        let directory = tempfile::tempdir().expect("Always valid");
        let mut launch = launch(
            directory.path(),
            r#"printf '{"opts":"%s"}\n' "$SPARK_SUBMIT_OPTS""#,
        );
        launch.environment = vec![(
            "SPARK_SUBMIT_OPTS".to_owned(),
            "-Dspark.executor.memory=4g".to_owned(),
        )];
        let transcript = launch.run().expect("Always valid");
        assert_eq!(
            transcript.environment,
            serde_json::json!({ "opts": "-Dspark.executor.memory=4g" })
        );
    }

    #[test]
    fn non_zero_exit() {
        let directory = tempfile::tempdir().expect("Always valid");
        let transcript = launch(directory.path(), r#"echo '{}'; exit 3"#)
            .run()
            .expect("Always valid");
        assert!(!transcript.success);
    }

    #[test]
    fn error_protocol_violation() {
        let directory = tempfile::tempdir().expect("Always valid");
        let result = launch(directory.path(), r#"echo '{"env":"x"}'; echo 'not json'"#).run();
        assert!(matches!(
            result,
            Err(Error::ProtocolViolation { line: 2, .. })
        ));
    }

    #[test]
    fn error_no_output() {
        let directory = tempfile::tempdir().expect("Always valid");
        let result = launch(directory.path(), "true").run();
        assert!(matches!(result, Err(Error::ProtocolViolation { .. })));
    }

    #[test]
    fn error_timeout() {
        let directory = tempfile::tempdir().expect("Always valid");
        let mut launch = launch(directory.path(), r#"echo '{}'; exec sleep 10"#);
        launch.timeout = Some(Duration::from_millis(200));
        let result = launch.run();
        assert!(matches!(result, Err(Error::Timeout { .. })));
    }

    #[test]
    fn error_invalid_utf8_kills_the_process() {
        let directory = tempfile::tempdir().expect("Always valid");
        let marker = directory.path().join("marker");
        let started = Instant::now();
        let result = launch(
            directory.path(),
            format!(
                r#"echo '{{}}'; printf '\377\376\n'; sleep 1; echo still-running > {marker:?}"#
            )
            .as_str(),
        )
        .run();

        assert!(matches!(
            result,
            Err(Error::ProtocolViolation { line: 2, .. })
        ));
        assert!(started.elapsed() < Duration::from_secs(1));
        std::thread::sleep(Duration::from_millis(1500));
        assert!(!marker.exists());
    }

    #[test]
    fn error_timeout_after_stdout_closed() {
        let directory = tempfile::tempdir().expect("Always valid");
        let mut launch = launch(directory.path(), r#"echo '{}'; exec >&-; sleep 4"#);
        launch.timeout = Some(Duration::from_millis(200));
        let started = Instant::now();
        let result = launch.run();

        assert!(matches!(result, Err(Error::Timeout { .. })));
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
