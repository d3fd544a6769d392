//!
//! The performance tester executable.
//!

pub(crate) mod arguments;

use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use perf_tester::Cluster;

use self::arguments::validation::validate_arguments;
use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => perf_tester::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            perf_tester::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = validate_arguments(arguments)?;
    let quiet = arguments.quiet;
    if !quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let config = perf_tester::Config::load(arguments.config_file.as_path())?;
    let plan = config.plan()?;
    if !quiet {
        println!(
            "     {} test plan with {} invocations from {:?}",
            "Loaded".bright_green().bold(),
            plan.len(),
            arguments.config_file,
        );
    }

    if let perf_tester::Workflow::BuildOnly = arguments.workflow {
        for suite in plan.suites().iter() {
            if !quiet {
                println!("    {} {}", "Building".bright_green().bold(), suite.name());
            }
            suite.build()?;
        }
        if !quiet {
            println!("    {} building test suites", "Finished".bright_green().bold());
        }
        return Ok(());
    }

    let settings = perf_tester::Settings {
        log_directory: config.log_directory.clone(),
        ignored_trials: config.ignored_trials,
        timeout: arguments
            .timeout
            .map(Duration::from_secs)
            .or(config.invocation_timeout()),
        verbose: arguments.verbose,
        quiet,
    };
    std::fs::create_dir_all(settings.log_directory.as_path()).map_err(|error| {
        anyhow::anyhow!(
            "Log directory {:?} creating: {error}",
            settings.log_directory
        )
    })?;
    let output_file = config.output_file(chrono::Utc::now());
    if let Some(parent) = output_file.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|error| anyhow::anyhow!("Output directory {parent:?} creating: {error}"))?;
    }

    let new_cluster = |spark_home: std::path::PathBuf, conf_dir: std::path::PathBuf| {
        perf_tester::StandaloneCluster::new(
            spark_home,
            config.cluster_url.clone(),
            config.driver_memory.clone(),
            conf_dir,
            config.worker_poll_interval(),
            config.worker_poll_attempts,
            arguments.verbose,
        )
    };
    let mut built_in_cluster = new_cluster(config.spark_home.clone(), config.conf_dir());

    let mut clusters = Vec::with_capacity(config.commit_ids.len().max(1));
    if config.use_cluster_spark {
        clusters.push(("default".to_owned(), built_in_cluster.clone()));
    } else {
        let build_manager = perf_tester::SparkBuildManager::new(
            config.spark_versions_directory.clone(),
            config.spark_git_repo.clone(),
            config.merge_commit_into_master,
            config.conf_dir(),
            quiet,
        );
        for commit_id in config.commit_ids.iter() {
            let spark_home = build_manager.build(commit_id.as_str())?;
            let conf_dir = spark_home.join("conf");
            clusters.push((commit_id.to_owned(), new_cluster(spark_home, conf_dir)));
        }
    }

    if !quiet {
        println!(
            "    {} the built-in Spark cluster",
            "Stopping".bright_green().bold()
        );
    }
    if let Err(error) = built_in_cluster
        .stop()
        .and_then(|()| built_in_cluster.ensure_stopped_on_workers())
    {
        eprintln!(
            "{} the built-in Spark cluster could not be stopped: {error:#}",
            "Error:".bright_red().bold()
        );
    }

    let runner = perf_tester::TestRunner::new(
        settings,
        output_file.clone(),
        arguments.failure_policy.unwrap_or(config.failure_policy),
        config.grace_period(),
        perf_tester::Filters::new(arguments.name),
    );
    let mut summary = perf_tester::Summary::new(arguments.verbose, quiet);

    let run_time_start = chrono::Utc::now();
    let mut result = Ok(());
    for (build, cluster) in clusters.iter_mut() {
        if !quiet {
            println!(
                "     {} tests against Spark `{build}` at {:?}",
                "Running".bright_green().bold(),
                cluster.spark_home(),
            );
        }
        result = runner.run(&plan, cluster, build.as_str(), &mut summary);
        if result.is_err() {
            break;
        }
    }
    let run_time_end = chrono::Utc::now();

    print!("{summary}");
    if !quiet {
        let elapsed = (run_time_end - run_time_start).num_seconds();
        println!(
            "    {} running tests in {}m{:02}s, results in {:?}",
            "Finished".bright_green().bold(),
            elapsed / 60,
            elapsed % 60,
            output_file,
        );
    }

    if let Some(path) = arguments.benchmark {
        perf_tester::Benchmark::new(&summary, run_time_start, run_time_end)
            .write_to_file(path.as_path(), arguments.benchmark_format)?;
    }

    result?;
    if !summary.is_successful() {
        anyhow::bail!("{} test invocations failed", summary.failed_count());
    }

    Ok(())
}
