//! Device record decoding.
//!
//! One record is one line of UTF-8 text holding a JSON object with numeric
//! `x` and `y` fields. Extra fields are ignored, and values that do not fit a
//! finite f32 are rejected.

use super::sample::OrientationSample;
use crate::error::RecordError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TiltRecord {
    x: f32,
    y: f32,
}

/// Decode one record (with or without its trailing newline).
///
/// The device's `x` axis points opposite to the steering direction, so it is
/// negated here; `y` is passed through unchanged.
pub fn decode_record(raw: &[u8]) -> Result<OrientationSample, RecordError> {
    let text = std::str::from_utf8(raw).map_err(|_| RecordError::NotUtf8)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(RecordError::Empty);
    }
    let record: TiltRecord = serde_json::from_str(text)?;
    let sample = OrientationSample {
        x: -record.x,
        y: record.y,
    };
    // Numbers beyond f32 range parse as infinities.
    if !sample.is_finite() {
        return Err(RecordError::OutOfRange);
    }
    Ok(sample)
}
