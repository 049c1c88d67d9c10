//! Orientation input from the motion sensor.
//!
//! The sensor streams newline-terminated JSON records over a serial link. A
//! detached reader thread decodes them into a single latest-value cell; the
//! frame loop reads that cell once per frame through [`OrientationFeed`].

pub mod decode;
pub mod sample;
pub mod source;

pub use decode::decode_record;
pub use sample::{OrientationSample, SampleCell};
pub use source::{pump_record, OrientationSource};

/// Anything the frame loop can pull the current tilt from.
pub trait OrientationFeed {
    /// Latest sample. Must not block.
    fn current_orientation(&self) -> OrientationSample;
}

impl OrientationFeed for SampleCell {
    fn current_orientation(&self) -> OrientationSample {
        self.load()
    }
}

/// A fixed tilt, for scripted sessions and tests.
impl OrientationFeed for OrientationSample {
    fn current_orientation(&self) -> OrientationSample {
        *self
    }
}
