//!
//! The scalar option value.
//!

///
/// The scalar option value.
///
/// Every resolved option maps to exactly one value of this type.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag value.
    Boolean(bool),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// An arbitrary string value.
    String(String),
}

impl Value {
    ///
    /// Multiplies a numeric value by `factor`.
    ///
    /// Integers are truncated and never drop below 1, so a scaled count is always usable.
    /// Returns `None` for non-numeric values.
    ///
    pub fn scale(&self, factor: f64) -> Option<Self> {
        match self {
            Self::Integer(value) => {
                let scaled = (*value as f64 * factor) as i64;
                Some(Self::Integer(scaled.max(1)))
            }
            Self::Float(value) => Some(Self::Float(value * factor)),
            Self::Boolean(_) | Self::String(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::String(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn scale_integer_truncates() {
        assert_eq!(Value::Integer(10).scale(0.25), Some(Value::Integer(2)));
    }

    #[test]
    fn scale_integer_floors_at_one() {
        assert_eq!(Value::Integer(3).scale(0.01), Some(Value::Integer(1)));
    }

    #[test]
    fn scale_float() {
        assert_eq!(Value::Float(1.5).scale(2.0), Some(Value::Float(3.0)));
    }

    #[test]
    fn scale_string_is_rejected() {
        assert_eq!(Value::from("MEMORY_ONLY").scale(2.0), None);
    }

    #[test]
    fn display() {
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Boolean(true).to_string(), "true");
    }

    #[test]
    fn deserialize_untagged() {
        let values: Vec<Value> =
            serde_yaml::from_str("[true, 4, 0.5, MEMORY_ONLY]").expect("Always valid");
        assert_eq!(
            values,
            vec![
                Value::Boolean(true),
                Value::Integer(4),
                Value::Float(0.5),
                Value::from("MEMORY_ONLY"),
            ]
        );
    }
}
