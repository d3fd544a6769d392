//!
//! The MLlib tests suite.
//!

use std::path::Path;

use crate::error::Error;
use crate::result::extract;
use crate::result::Body;
use crate::result::ResultRecord;
use crate::statistics::Statistics;

use super::jvm::Assembly;

///
/// The MLlib tests suite.
///
/// Every sample is a `runtime;train-metric;test-metric` triple.
///
#[derive(Debug, Clone)]
pub struct MLlibTests {
    /// The suite assembly.
    pub assembly: Assembly,
}

impl MLlibTests {
    /// The suite name.
    pub const NAME: &'static str = "mllib-tests";

    /// The sample component separator.
    pub const METRIC_SEPARATOR: char = ';';

    ///
    /// A shortcut constructor.
    ///
    pub fn new(project_directory: &Path, sbt_command: &str) -> Self {
        Self {
            assembly: Assembly::new(
                project_directory,
                Self::NAME,
                "mllib-perf-tests-assembly.jar",
                sbt_command,
            ),
        }
    }

    ///
    /// Reduces every metric of the triples independently.
    ///
    /// A missing results line yields a failed record rather than an error.
    ///
    pub fn process_output(
        short_name: &str,
        app_flags: &[String],
        stdout: &str,
        ignored_trials: usize,
    ) -> Result<ResultRecord, Error> {
        let samples = match extract::samples(stdout, ignored_trials)? {
            Some(samples) => samples,
            None => {
                return Ok(ResultRecord::new(
                    short_name.to_owned(),
                    app_flags,
                    Body::Failed,
                ))
            }
        };

        let mut metrics: [Vec<&str>; 3] = Default::default();
        for sample in samples.into_iter() {
            let components = sample
                .split(Self::METRIC_SEPARATOR)
                .collect::<Vec<&str>>();
            if components.len() < metrics.len() {
                return Err(Error::MalformedMetrics {
                    sample: sample.to_owned(),
                    expected: metrics.len(),
                });
            }
            for (metric, component) in metrics.iter_mut().zip(components) {
                metric.push(component);
            }
        }
        let [runtime, train, test] = metrics;

        Ok(ResultRecord::new(
            short_name.to_owned(),
            app_flags,
            Body::Metrics {
                runtime: Statistics::from_samples(runtime.as_slice())?,
                train: Statistics::from_samples(train.as_slice())?,
                test: Statistics::from_samples(test.as_slice())?,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::MLlibTests;
    use crate::error::Error;
    use crate::result::Body;

    #[test]
    fn triples() {
        let stdout = "{}\nresults: 9;0;0,1.0;0.5;0.25,3.0;0.7;0.75\n";
        let record =
            MLlibTests::process_output("glm-regression", &[], stdout, 1).expect("Always valid");
        match record.body {
            Body::Metrics {
                runtime,
                train,
                test,
            } => {
                assert_eq!(runtime.count, 2);
                assert_eq!(runtime.mean, 2.0);
                assert!((train.mean - 0.6).abs() < 1e-12);
                assert_eq!(test.mean, 0.5);
            }
            body => panic!("Unexpected body {body:?}"),
        }
    }

    #[test]
    fn missing_results() {
        let record = MLlibTests::process_output("glm-regression", &[], "{}\n", 0)
            .expect("Always valid");
        assert!(record.is_failed());
    }

    #[test]
    fn error_short_triple() {
        let result = MLlibTests::process_output("glm-regression", &[], "results: 1.0;0.5", 0);
        assert!(matches!(result, Err(Error::MalformedMetrics { expected: 3, .. })));
    }
}
