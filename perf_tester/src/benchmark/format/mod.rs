//!
//! The benchmark report file formats.
//!

pub mod csv;

use super::Benchmark;

///
/// The benchmark report file format, selected with `--benchmark-format`.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkFormat {
    /// The whole report as pretty-printed JSON.
    #[default]
    Json,
    /// One row per reduced metric.
    Csv,
}

impl BenchmarkFormat {
    /// Every format, in the order they are listed in diagnostics.
    pub const ALL: [Self; 2] = [Self::Json, Self::Csv];

    ///
    /// Renders the report in this format.
    ///
    pub fn render(self, benchmark: &Benchmark) -> anyhow::Result<String> {
        match self {
            Self::Json => serde_json::to_string_pretty(benchmark)
                .map_err(|error| anyhow::anyhow!("Benchmark JSON rendering: {error}")),
            Self::Csv => csv::render(benchmark)
                .map_err(|error| anyhow::anyhow!("Benchmark CSV rendering: {error}")),
        }
    }
}

impl std::str::FromStr for BenchmarkFormat {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.to_string().eq_ignore_ascii_case(string))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown benchmark format `{string}`. Supported formats: {}",
                    Self::ALL.map(|format| format.to_string()).join(", ")
                )
            })
    }
}

impl std::fmt::Display for BenchmarkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BenchmarkFormat;

    #[test]
    fn parse() {
        assert_eq!("json".parse::<BenchmarkFormat>().ok(), Some(BenchmarkFormat::Json));
        assert_eq!("CSV".parse::<BenchmarkFormat>().ok(), Some(BenchmarkFormat::Csv));
        let error = "xlsx"
            .parse::<BenchmarkFormat>()
            .expect_err("Always fails");
        assert!(error.to_string().ends_with("Supported formats: json, csv"));
    }
}
