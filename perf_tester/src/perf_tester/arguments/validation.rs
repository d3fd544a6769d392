//!
//! Validate the arguments passed from user, checking invariants that are not
//! expressed in the type system.
//!

use super::Arguments;

///
/// Validate the arguments passed from user, checking invariants that are not
/// expressed in the type system.
///
pub fn validate_arguments(arguments: Arguments) -> anyhow::Result<Arguments> {
    if arguments.verbose && arguments.quiet {
        anyhow::bail!("Arguments `--verbose` and `--quiet` are mutually exclusive.");
    }
    if arguments.timeout == Some(0) {
        anyhow::bail!("Argument `--timeout` must be positive.");
    }
    if arguments.benchmark.is_some() && arguments.workflow == perf_tester::Workflow::BuildOnly {
        anyhow::bail!("Argument `--benchmark` requires the `run` workflow.");
    }

    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::validate_arguments;
    use crate::arguments::Arguments;

    #[test]
    fn defaults() {
        let arguments = Arguments::try_parse_from(["perf-tester"]).expect("Always valid");
        let arguments = validate_arguments(arguments).expect("Always valid");
        assert_eq!(
            arguments.config_file,
            std::path::PathBuf::from("config/config.yaml")
        );
        assert_eq!(arguments.workflow, perf_tester::Workflow::BuildAndRun);
        assert_eq!(arguments.failure_policy, None);
    }

    #[test]
    fn overrides() {
        let arguments = Arguments::try_parse_from([
            "perf-tester",
            "--failure-policy",
            "continue",
            "--timeout",
            "600",
            "-n",
            "sort",
            "-n",
            "count",
            "--benchmark-format",
            "csv",
        ])
        .expect("Always valid");
        let arguments = validate_arguments(arguments).expect("Always valid");
        assert_eq!(
            arguments.failure_policy,
            Some(perf_tester::FailurePolicy::Continue)
        );
        assert_eq!(arguments.timeout, Some(600));
        assert_eq!(arguments.name, vec!["sort", "count"]);
        assert_eq!(arguments.benchmark_format, perf_tester::BenchmarkFormat::Csv);
    }

    #[test]
    fn error_verbose_and_quiet() {
        let arguments =
            Arguments::try_parse_from(["perf-tester", "-v", "-q"]).expect("Always valid");
        assert!(validate_arguments(arguments).is_err());
    }

    #[test]
    fn error_benchmark_without_run() {
        let arguments = Arguments::try_parse_from([
            "perf-tester",
            "--workflow",
            "build",
            "--benchmark",
            "benchmark.json",
        ])
        .expect("Always valid");
        assert!(validate_arguments(arguments).is_err());
    }
}
