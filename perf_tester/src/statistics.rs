//!
//! The sample statistics.
//!

use crate::error::Error;

///
/// The sample statistics.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Statistics {
    /// The number of samples.
    pub count: usize,
    /// The arithmetic mean.
    pub mean: f64,
    /// The sample standard deviation, `0` for a single sample.
    pub stddev: f64,
    /// The minimal sample.
    pub min: f64,
    /// The maximal sample.
    pub max: f64,
}

impl Statistics {
    ///
    /// Reduces raw sample strings.
    ///
    /// Surrounding whitespace is ignored. An empty sequence and non-finite samples are errors
    /// rather than `NaN`.
    ///
    pub fn from_samples<S>(samples: &[S]) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let values = samples
            .iter()
            .map(|sample| {
                let sample = sample.as_ref().trim();
                let value = sample
                    .parse::<f64>()
                    .map_err(|error| Error::MalformedSample {
                        sample: sample.to_owned(),
                        message: error.to_string(),
                    })?;
                if !value.is_finite() {
                    return Err(Error::MalformedSample {
                        sample: sample.to_owned(),
                        message: "infinite and NaN values are not samples".to_owned(),
                    });
                }
                Ok(value)
            })
            .collect::<Result<Vec<f64>, Error>>()?;
        Self::from_values(values.as_slice())
    }

    ///
    /// Reduces numeric samples.
    ///
    pub fn from_values(values: &[f64]) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::InsufficientSamples {
                required: 1,
                found: 0,
            });
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let stddev = if count > 1 {
            let squares = values
                .iter()
                .map(|value| (value - mean).powi(2))
                .sum::<f64>();
            (squares / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            count,
            mean,
            stddev,
            min,
            max,
        })
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {:.3}, {:.3}, {}, {}",
            self.count, self.mean, self.stddev, self.min, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;
    use crate::error::Error;

    #[test]
    fn basic() {
        let statistics = Statistics::from_samples(&["1", "2", "3", "4", "5"]).expect("Always valid");
        assert_eq!(statistics.count, 5);
        assert_eq!(statistics.mean, 3.0);
        assert_eq!(statistics.min, 1.0);
        assert_eq!(statistics.max, 5.0);
        assert!((statistics.stddev - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn whitespace() {
        let statistics = Statistics::from_samples(&[" 10", "20 ", " 30 "]).expect("Always valid");
        assert_eq!(statistics.mean, 20.0);
        assert_eq!(statistics.stddev, 10.0);
    }

    #[test]
    fn single_sample() {
        let statistics = Statistics::from_samples(&["7.5"]).expect("Always valid");
        assert_eq!(statistics.count, 1);
        assert_eq!(statistics.stddev, 0.0);
        assert_eq!(statistics.min, 7.5);
        assert_eq!(statistics.max, 7.5);
    }

    #[test]
    fn display() {
        let statistics = Statistics::from_samples(&["10", "20", "30"]).expect("Always valid");
        assert_eq!(statistics.to_string(), "3, 20.000, 10.000, 10, 30");
    }

    #[test]
    fn error_empty() {
        let samples: [&str; 0] = [];
        assert!(matches!(
            Statistics::from_samples(&samples),
            Err(Error::InsufficientSamples {
                required: 1,
                found: 0
            })
        ));
    }

    #[test]
    fn error_malformed() {
        assert!(matches!(
            Statistics::from_samples(&["1", "fast"]),
            Err(Error::MalformedSample { .. })
        ));
    }

    #[test]
    fn error_non_finite() {
        for sample in ["NaN", "inf", "-infinity"] {
            assert!(matches!(
                Statistics::from_samples(&["1", sample, "3"]),
                Err(Error::MalformedSample { .. })
            ));
        }
    }
}
