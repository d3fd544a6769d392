//!
//! The result marker extraction from the benchmark output.
//!
//! The marker strings are shared with the benchmark applications and must not change.
//!

use crate::error::Error;

/// The marker preceding the comma-separated samples.
pub const RESULTS_TOKEN: &str = "results: ";

/// The marker preceding the streaming benchmark verdict.
pub const STREAMING_RESULT_TOKEN: &str = "Result: ";

/// The number of trailing output lines searched for the streaming verdict.
pub const STREAMING_TAIL_LINES: usize = 5;

///
/// Whether the line carries one of the result markers.
///
/// JSON object lines are trial records even if their text contains a marker.
///
pub fn is_marker_line(line: &str) -> bool {
    !line.trim_start().starts_with('{')
        && (line.contains(RESULTS_TOKEN) || line.contains(STREAMING_RESULT_TOKEN))
}

///
/// Returns the raw samples of the first results line, without the warm-up trials.
///
/// Returns `None` if there is no results line.
///
pub fn samples(output: &str, ignored_trials: usize) -> Result<Option<Vec<&str>>, Error> {
    let line = match output
        .lines()
        .filter(|line| is_marker_line(line))
        .find_map(|line| line.split_once(RESULTS_TOKEN))
    {
        Some((_, line)) => line,
        None => return Ok(None),
    };

    let samples = line.split(',').collect::<Vec<&str>>();
    if samples.len() <= ignored_trials {
        return Err(Error::InsufficientSamples {
            required: ignored_trials + 1,
            found: samples.len(),
        });
    }
    Ok(Some(samples[ignored_trials..].to_vec()))
}

///
/// Returns the streaming verdict found in the last output lines.
///
pub fn streaming_result(output: &str) -> Option<&str> {
    let lines = output.lines().collect::<Vec<&str>>();
    let tail_start = lines.len().saturating_sub(STREAMING_TAIL_LINES);
    lines[tail_start..]
        .iter()
        .filter(|line| is_marker_line(line))
        .find_map(|line| line.split_once(STREAMING_RESULT_TOKEN))
        .map(|(_, result)| result.trim_end())
}
