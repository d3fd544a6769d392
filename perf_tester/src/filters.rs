//!
//! The performance tester filters.
//!

use std::collections::HashSet;

///
/// The performance tester filters.
///
#[derive(Debug, Default, Clone)]
pub struct Filters {
    /// The test short name filters.
    name_filters: HashSet<String>,
}

impl Filters {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name_filters: Vec<String>) -> Self {
        Self {
            name_filters: name_filters.into_iter().collect(),
        }
    }

    ///
    /// Check if the test short name is compatible with the filters.
    ///
    pub fn check_name(&self, name: &str) -> bool {
        self.name_filters.is_empty()
            || self
                .name_filters
                .iter()
                .any(|filter| name.contains(filter.as_str()))
    }
}
