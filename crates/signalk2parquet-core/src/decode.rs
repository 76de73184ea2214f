//! Strict line decoding for the wire format

use crate::record::InputRecord;
use thiserror::Error;

/// Failure to turn one line of wire text into an [`InputRecord`].
///
/// Carries the offending line so a failed run can be diagnosed without
/// re-running against the input.
#[derive(Debug, Error)]
#[error("failed to parse record line {line:?}: {source}")]
pub struct DecodeError {
    pub line: String,
    #[source]
    pub source: serde_json::Error,
}

/// Decode one line of input into an [`InputRecord`].
///
/// Malformed JSON, or a missing/mistyped required field, is an error; the
/// caller treats it as fatal for the whole run. Unknown extra fields are
/// accepted and dropped.
pub fn decode_line(line: &str) -> Result<InputRecord, DecodeError> {
    serde_json::from_str(line).map_err(|source| DecodeError {
        line: line.to_string(),
        source,
    })
}
