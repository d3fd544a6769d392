//!
//! The benchmark report element.
//!

use crate::result::Body;
use crate::result::ResultRecord;

///
/// The benchmark report element.
///
#[derive(Debug, Clone, serde::Serialize)]
pub struct Element {
    /// The test short name.
    pub name: String,
    /// The application flags.
    pub options: String,
    /// The invocation wall-clock duration in milliseconds.
    pub elapsed_ms: i64,
    /// The reduced result.
    pub body: Body,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(record: &ResultRecord, elapsed: chrono::TimeDelta) -> Self {
        Self {
            name: record.short_name.clone(),
            options: record.options.clone(),
            elapsed_ms: elapsed.num_milliseconds(),
            body: record.body.clone(),
        }
    }
}
