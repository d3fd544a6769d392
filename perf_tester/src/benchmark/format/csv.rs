//!
//! The CSV benchmark report.
//!
//! Columns: "build", "test", "options", "metric", count, mean, stddev, min, max, "result".
//! Statistics bodies give one `time` row, MLlib bodies give `runtime`, `train` and `test` rows.
//!

use std::fmt::Write;

use super::Benchmark;
use crate::result::Body;
use crate::statistics::Statistics;

/// The expected length of one row, used to preallocate the report.
const ROW_CAPACITY: usize = 512;

/// The header row.
pub const HEADER: &str =
    r#""build", "test", "options", "metric", "count", "mean", "stddev", "min", "max", "result""#;

///
/// Renders the report rows in build order, then execution order.
///
pub fn render(benchmark: &Benchmark) -> Result<String, std::fmt::Error> {
    let rows = benchmark.builds.values().map(Vec::len).sum::<usize>() + 1;
    let mut result = String::with_capacity(rows * ROW_CAPACITY);
    writeln!(result, "{HEADER}")?;
    for (build, elements) in benchmark.builds.iter() {
        for element in elements.iter() {
            let prefix = format!(
                "\"{build}\", \"{}\", \"{}\"",
                element.name, element.options
            );
            match &element.body {
                Body::Statistics { statistics } => {
                    write_metric(&mut result, prefix.as_str(), "time", statistics)?
                }
                Body::Metrics {
                    runtime,
                    train,
                    test,
                } => {
                    write_metric(&mut result, prefix.as_str(), "runtime", runtime)?;
                    write_metric(&mut result, prefix.as_str(), "train", train)?;
                    write_metric(&mut result, prefix.as_str(), "test", test)?;
                }
                Body::Streaming { result: verdict } => writeln!(
                    result,
                    "{prefix}, \"\", , , , , , \"{}\"",
                    verdict.as_deref().unwrap_or_default(),
                )?,
                Body::Failed => writeln!(result, "{prefix}, \"\", , , , , , \"FAILED\"")?,
            }
        }
    }
    Ok(result)
}

fn write_metric(
    result: &mut String,
    prefix: &str,
    metric: &str,
    statistics: &Statistics,
) -> std::fmt::Result {
    writeln!(
        result,
        "{prefix}, \"{metric}\", {}, {}, {}, {}, {}, \"\"",
        statistics.count, statistics.mean, statistics.stddev, statistics.min, statistics.max,
    )
}
