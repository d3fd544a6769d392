//!
//! The option set scaling function.
//!

///
/// The option set scaling function.
///
/// Maps the scale factor to a multiplier applied to every numeric base value.
/// Both variants are monotonic in the scale factor.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    /// The values grow proportionally to the scale factor.
    Linear,
    /// The values grow as the scale factor raised to the exponent.
    Power(f64),
}

impl Scaling {
    ///
    /// Returns the multiplier for the scale factor.
    ///
    pub fn multiplier(&self, scale_factor: f64) -> f64 {
        match self {
            Self::Linear => scale_factor,
            Self::Power(exponent) => scale_factor.powf(*exponent),
        }
    }
}

impl std::fmt::Display for Scaling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Power(exponent) => write!(f, "power({exponent})"),
        }
    }
}
