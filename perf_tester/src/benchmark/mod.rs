//!
//! The benchmark report.
//!

pub mod element;
pub mod format;

use std::collections::BTreeMap;
use std::path::Path;

use crate::summary::element::outcome::Outcome;
use crate::summary::Summary;

use self::element::Element;
use self::format::BenchmarkFormat;

///
/// The benchmark report metadata.
///
#[derive(Debug, Clone, serde::Serialize)]
pub struct Metadata {
    /// The run start time.
    pub start: chrono::DateTime<chrono::Utc>,
    /// The run end time.
    pub end: chrono::DateTime<chrono::Utc>,
}

///
/// The benchmark report.
///
/// The passed invocations grouped by the Spark build they ran against.
///
#[derive(Debug, Clone, serde::Serialize)]
pub struct Benchmark {
    /// The run metadata.
    pub metadata: Metadata,
    /// The results per build, in execution order within each build.
    pub builds: BTreeMap<String, Vec<Element>>,
}

impl Benchmark {
    ///
    /// Collects the passed invocations of the summary.
    ///
    pub fn new(
        summary: &Summary,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        let mut builds: BTreeMap<String, Vec<Element>> = BTreeMap::new();
        for element in summary.elements().iter() {
            if let Outcome::Passed {
                ref record,
                ref elapsed,
            } = element.outcome
            {
                builds
                    .entry(element.build.clone())
                    .or_default()
                    .push(Element::new(record, *elapsed));
            }
        }

        Self {
            metadata: Metadata { start, end },
            builds,
        }
    }

    ///
    /// Writes the report to a file, replacing it.
    ///
    pub fn write_to_file(&self, path: &Path, format: BenchmarkFormat) -> anyhow::Result<()> {
        let contents = format.render(self)?;
        std::fs::write(path, contents)
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
        Ok(())
    }
}
