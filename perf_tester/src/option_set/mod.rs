//!
//! The option set to sweep.
//!

pub mod scaling;

use std::sync::Arc;

use crate::error::Error;
use crate::value::Value;

use self::scaling::Scaling;

///
/// The value generator taking the scale factor.
///
pub type Generator = Arc<dyn Fn(f64) -> Vec<Value> + Send + Sync>;

///
/// The option set values.
///
#[derive(Clone)]
pub enum Values {
    /// The values do not depend on the scale factor.
    Fixed(Vec<Value>),
    /// The numeric base values are multiplied according to the scaling function.
    Scaled {
        /// The base values for the scale factor of 1.
        base: Vec<Value>,
        /// The scaling function.
        scaling: Scaling,
    },
    /// The values are produced by an arbitrary deterministic function of the scale factor.
    Generated(Generator),
}

impl std::fmt::Debug for Values {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(values) => f.debug_tuple("Fixed").field(values).finish(),
            Self::Scaled { base, scaling } => f
                .debug_struct("Scaled")
                .field("base", base)
                .field("scaling", scaling)
                .finish(),
            Self::Generated(_) => f.write_str("Generated(..)"),
        }
    }
}

///
/// The option set to sweep.
///
/// One configurable parameter together with the candidate values the plan expands over.
///
#[derive(Debug, Clone)]
pub struct OptionSet {
    /// The option name, used as the flag key.
    pub name: String,
    /// The candidate values.
    pub values: Values,
}

impl OptionSet {
    ///
    /// A shortcut constructor for a plain option with a single value.
    ///
    pub fn constant<V>(name: &str, value: V) -> Self
    where
        V: Into<Value>,
    {
        Self::fixed(name, vec![value.into()])
    }

    ///
    /// A shortcut constructor for a fixed sweep.
    ///
    pub fn fixed(name: &str, values: Vec<Value>) -> Self {
        Self {
            name: name.to_owned(),
            values: Values::Fixed(values),
        }
    }

    ///
    /// A shortcut constructor for a sweep depending on the scale factor.
    ///
    pub fn scaled(name: &str, base: Vec<Value>, scaling: Scaling) -> Self {
        Self {
            name: name.to_owned(),
            values: Values::Scaled { base, scaling },
        }
    }

    ///
    /// A shortcut constructor for a generated sweep.
    ///
    pub fn generated<F>(name: &str, generator: F) -> Self
    where
        F: Fn(f64) -> Vec<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.to_owned(),
            values: Values::Generated(Arc::new(generator)),
        }
    }

    ///
    /// Resolves the set into concrete values for the scale factor.
    ///
    /// The resolved sequence is never empty.
    ///
    pub fn resolve(&self, scale_factor: f64) -> Result<Vec<Value>, Error> {
        if self.name.is_empty() {
            return Err(Error::configuration("Option name is empty"));
        }
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(Error::configuration(format!(
                "Option `{}` cannot be resolved with the scale factor {scale_factor}",
                self.name
            )));
        }

        let values = match &self.values {
            Values::Fixed(values) => values.to_owned(),
            Values::Scaled { base, scaling } => {
                let multiplier = scaling.multiplier(scale_factor);
                base.iter()
                    .map(|value| {
                        value.scale(multiplier).ok_or_else(|| {
                            Error::configuration(format!(
                                "Option `{}` scales {scaling} but has a non-numeric value `{value}`",
                                self.name
                            ))
                        })
                    })
                    .collect::<Result<Vec<Value>, Error>>()?
            }
            Values::Generated(generator) => generator(scale_factor),
        };

        if values.is_empty() {
            return Err(Error::configuration(format!(
                "Option `{}` has no values",
                self.name
            )));
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::scaling::Scaling;
    use super::OptionSet;
    use crate::error::Error;
    use crate::value::Value;

    #[test]
    fn fixed_ignores_scale_factor() {
        let set = OptionSet::fixed("num-trials", vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(
            set.resolve(10.0).expect("Always valid"),
            vec![Value::Integer(1), Value::Integer(2)]
        );
    }

    #[test]
    fn constant() {
        let set = OptionSet::constant("storage-location", "");
        assert_eq!(
            set.resolve(1.0).expect("Always valid"),
            vec![Value::from("")]
        );
    }

    #[test]
    fn scaled_linear() {
        let set = OptionSet::scaled(
            "num-tasks",
            vec![Value::Integer(100), Value::Integer(400)],
            Scaling::Linear,
        );
        assert_eq!(
            set.resolve(0.5).expect("Always valid"),
            vec![Value::Integer(50), Value::Integer(200)]
        );
    }

    #[test]
    fn scaled_power() {
        let set = OptionSet::scaled("num-records", vec![Value::Float(1.0)], Scaling::Power(2.0));
        assert_eq!(
            set.resolve(3.0).expect("Always valid"),
            vec![Value::Float(9.0)]
        );
    }

    #[test]
    fn scaled_is_monotonic() {
        let set = OptionSet::scaled("num-records", vec![Value::Integer(1000)], Scaling::Linear);
        let small = set.resolve(0.1).expect("Always valid");
        let large = set.resolve(2.0).expect("Always valid");
        match (&small[0], &large[0]) {
            (Value::Integer(small), Value::Integer(large)) => assert!(small < large),
            _ => panic!("Integers expected"),
        }
    }

    #[test]
    fn generated() {
        let set = OptionSet::generated("num-partitions", |scale_factor| {
            (1..=3)
                .map(|index| Value::Integer((index as f64 * scale_factor * 10.0) as i64))
                .collect()
        });
        assert_eq!(
            set.resolve(1.0).expect("Always valid"),
            vec![Value::Integer(10), Value::Integer(20), Value::Integer(30)]
        );
    }

    #[test]
    fn error_empty() {
        let set = OptionSet::fixed("num-trials", vec![]);
        assert!(matches!(set.resolve(1.0), Err(Error::Configuration { .. })));
    }

    #[test]
    fn error_non_numeric_scaled() {
        let set = OptionSet::scaled("persistent-type", vec![Value::from("memory")], Scaling::Linear);
        assert!(matches!(set.resolve(1.0), Err(Error::Configuration { .. })));
    }

    #[test]
    fn error_invalid_scale_factor() {
        let set = OptionSet::constant("num-trials", 10);
        assert!(matches!(set.resolve(0.0), Err(Error::Configuration { .. })));
        assert!(matches!(set.resolve(f64::NAN), Err(Error::Configuration { .. })));
    }
}
