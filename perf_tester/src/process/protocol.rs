//!
//! The benchmark process output protocol.
//!
//! The first stdout line is a JSON object describing the environment the benchmark actually ran
//! with. Every following non-empty line is a JSON object with one trial result, except for the
//! result marker lines, which are consumed later by the suite output processing.
//!

use crate::result::extract;

///
/// The protocol state of one benchmark process.
///
#[derive(Debug, Default)]
pub struct Protocol {
    /// The environment description from the first line.
    environment: Option<serde_json::Value>,
    /// The trial result records.
    records: Vec<serde_json::Value>,
    /// The number of lines consumed so far.
    line: usize,
}

///
/// The protocol event produced by one line.
///
#[derive(Debug, PartialEq)]
pub enum Event<'a> {
    /// The environment description has been received.
    Environment(&'a serde_json::Value),
    /// A trial result record has been received.
    Record(&'a serde_json::Value),
    /// A result marker line has been received.
    Marker,
    /// A blank line has been skipped.
    Blank,
}

///
/// The protocol violation.
///
#[derive(Debug, PartialEq)]
pub struct Violation {
    /// The 1-based line number.
    pub line: usize,
    /// The violation description.
    pub message: String,
}

impl Protocol {
    ///
    /// Consumes one stdout line.
    ///
    pub fn feed(&mut self, line: &str) -> Result<Event<'_>, Violation> {
        self.line += 1;

        if self.environment.is_none() {
            let environment = self.parse_object(line, "environment description")?;
            return Ok(Event::Environment(self.environment.insert(environment)));
        }

        if line.trim().is_empty() {
            return Ok(Event::Blank);
        }
        if extract::is_marker_line(line) {
            return Ok(Event::Marker);
        }

        let record = self.parse_object(line, "trial result")?;
        self.records.push(record);
        Ok(Event::Record(self.records.last().expect("Always exists")))
    }

    ///
    /// Decodes the next raw stdout line, without its line terminator.
    ///
    /// Output that is not UTF-8 cannot be JSON, so it violates the protocol.
    ///
    pub fn decode(&self, mut line: Vec<u8>) -> Result<String, Violation> {
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        String::from_utf8(line).map_err(|error| Violation {
            line: self.line + 1,
            message: format!("expected UTF-8 text: {error}"),
        })
    }

    ///
    /// Finishes the stream after the process exit.
    ///
    pub fn finish(self) -> Result<(serde_json::Value, Vec<serde_json::Value>), Violation> {
        match self.environment {
            Some(environment) => Ok((environment, self.records)),
            None => Err(Violation {
                line: self.line + 1,
                message: "the output ended before the environment description".to_owned(),
            }),
        }
    }

    ///
    /// Parses a line that must contain a single JSON object.
    ///
    fn parse_object(&self, line: &str, what: &str) -> Result<serde_json::Value, Violation> {
        let value: serde_json::Value =
            serde_json::from_str(line.trim()).map_err(|error| Violation {
                line: self.line,
                message: format!("expected a JSON {what}, found `{line}`: {error}"),
            })?;
        if !value.is_object() {
            return Err(Violation {
                line: self.line,
                message: format!("expected a JSON object as the {what}, found `{line}`"),
            });
        }
        Ok(value)
    }
}
