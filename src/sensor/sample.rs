//! The orientation sample and its single-slot shared cell.

use std::sync::atomic::{AtomicU64, Ordering};

/// Raw tilt reading from the motion sensor, already in steering orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationSample {
    pub x: f32,
    pub y: f32,
}

impl OrientationSample {
    pub const ZERO: OrientationSample = OrientationSample { x: 0.0, y: 0.0 };

    /// Both axes are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn to_bits(self) -> u64 {
        (u64::from(self.x.to_bits()) << 32) | u64::from(self.y.to_bits())
    }

    fn from_bits(bits: u64) -> Self {
        Self {
            x: f32::from_bits((bits >> 32) as u32),
            y: f32::from_bits(bits as u32),
        }
    }
}

/// Latest-value slot shared between the reader thread and the frame loop.
///
/// One writer overwrites, one reader loads. Unread samples are dropped, never
/// queued. Both axes live in one atomic word so a load never sees `x` from one
/// record and `y` from another. A reader may see a sample up to one record old.
#[derive(Debug, Default)]
pub struct SampleCell {
    bits: AtomicU64,
}

impl SampleCell {
    /// Cell holding the zero sample.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, sample: OrientationSample) {
        self.bits.store(sample.to_bits(), Ordering::Release);
    }

    pub fn load(&self) -> OrientationSample {
        OrientationSample::from_bits(self.bits.load(Ordering::Acquire))
    }
}
