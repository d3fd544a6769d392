//!
//! The option set entry of the configuration file.
//!

use crate::error::Error;
use crate::option_set::scaling::Scaling;
use crate::option_set::OptionSet;
use crate::value::Value;

///
/// The option set entry of the configuration file.
///
/// Exactly one of `value` and `values` must be present; `scaling` requires `values`.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionConfig {
    /// The option name.
    pub name: String,
    /// The single value of a plain option.
    #[serde(default)]
    pub value: Option<Value>,
    /// The values of a sweep.
    #[serde(default)]
    pub values: Option<Vec<Value>>,
    /// The scaling function of a sweep.
    #[serde(default)]
    pub scaling: Option<Scaling>,
}

impl TryFrom<OptionConfig> for OptionSet {
    type Error = Error;

    fn try_from(config: OptionConfig) -> Result<Self, Self::Error> {
        match (config.value, config.values, config.scaling) {
            (Some(value), None, None) => Ok(Self::constant(config.name.as_str(), value)),
            (None, Some(values), None) => Ok(Self::fixed(config.name.as_str(), values)),
            (None, Some(values), Some(scaling)) => {
                Ok(Self::scaled(config.name.as_str(), values, scaling))
            }
            (Some(_), _, Some(_)) => Err(Error::configuration(format!(
                "Option `{}` scales a single value; use `values` instead",
                config.name
            ))),
            (Some(_), Some(_), None) => Err(Error::configuration(format!(
                "Option `{}` has both `value` and `values`",
                config.name
            ))),
            (None, None, _) => Err(Error::configuration(format!(
                "Option `{}` has neither `value` nor `values`",
                config.name
            ))),
        }
    }
}
