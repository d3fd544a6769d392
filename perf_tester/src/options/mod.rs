//!
//! The resolved option combination.
//!

pub mod flags;

use crate::value::Value;

///
/// The resolved option combination.
///
/// Keeps the insertion order, which is the option set order of the benchmark definition,
/// so the flags render identically on every call.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Options {
    /// The name-value pairs.
    entries: Vec<(String, Value)>,
}

impl Options {
    ///
    /// Appends an entry.
    ///
    pub fn push(&mut self, name: String, value: Value) {
        self.entries.push((name, value));
    }

    ///
    /// Returns the value by the option name.
    ///
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    ///
    /// Returns an iterator over the entries in insertion order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    ///
    /// Returns the number of entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Whether there are no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for Options {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
