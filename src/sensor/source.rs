//! Orientation source: a background reader feeding the latest-value cell.

use super::decode::decode_record;
use super::sample::{OrientationSample, SampleCell};
use super::OrientationFeed;
use crate::core::constants::{DEFAULT_READ_TIMEOUT_MS, END_OF_STREAM_IDLE_MS, READ_ERROR_BACKOFF_MS};
use crate::error::{RecordError, SourceError};
use log::{debug, info, trace};
use std::io::{BufRead, BufReader};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Handle to a running orientation reader.
///
/// The reader thread is detached and runs for the rest of the process. It
/// never stops on bad input; the handle only exposes the latest sample.
#[derive(Debug, Clone)]
pub struct OrientationSource {
    name: String,
    cell: Arc<SampleCell>,
}

impl OrientationSource {
    /// Open a serial device with the default read timeout and start reading.
    pub fn connect(address: &str, baud_rate: u32) -> Result<Self, SourceError> {
        Self::connect_with_timeout(
            address,
            baud_rate,
            Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
        )
    }

    /// Open a serial device and start reading.
    ///
    /// Fails with `SourceError::DeviceUnavailable` if the port cannot be opened.
    /// Read timeouts after that point are silent.
    pub fn connect_with_timeout(
        address: &str,
        baud_rate: u32,
        read_timeout: Duration,
    ) -> Result<Self, SourceError> {
        let port = serialport::new(address, baud_rate)
            .timeout(read_timeout)
            .open()
            .map_err(|e| SourceError::DeviceUnavailable {
                address: address.to_string(),
                source: e.into(),
            })?;
        info!("connected to orientation device {address} at {baud_rate} baud");
        Self::from_reader(address, BufReader::new(port))
    }

    /// Start the reader loop over an arbitrary line stream.
    ///
    /// Used for recorded sensor logs. At end of stream the reader idles and
    /// polls again, so a log that is still being appended keeps flowing.
    pub fn from_reader<R>(name: impl Into<String>, reader: R) -> Result<Self, SourceError>
    where
        R: BufRead + Send + 'static,
    {
        let name = name.into();
        let cell = Arc::new(SampleCell::new());
        let thread_cell = Arc::clone(&cell);
        let thread_name = name.clone();

        thread::Builder::new()
            .name("orientation-reader".to_string())
            .spawn(move || run_reader(&thread_name, reader, &thread_cell))
            .map_err(SourceError::ReaderSpawn)?;

        Ok(Self { name, cell })
    }

    /// Most recent valid sample, or zero before the first one arrives.
    pub fn current_orientation(&self) -> OrientationSample {
        self.cell.load()
    }

    /// Device address or log path this source reads from.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl OrientationFeed for OrientationSource {
    fn current_orientation(&self) -> OrientationSample {
        OrientationSource::current_orientation(self)
    }
}

/// Read one record from `reader` and publish it to `cell` if it decodes.
///
/// Returns `Ok(None)` at end of stream. Any bytes of a failed read are
/// discarded along with the record.
pub fn pump_record<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    cell: &SampleCell,
) -> Result<Option<OrientationSample>, RecordError> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let sample = decode_record(buf)?;
    cell.store(sample);
    Ok(Some(sample))
}

fn run_reader<R: BufRead>(name: &str, mut reader: R, cell: &SampleCell) -> ! {
    let mut buf = Vec::new();
    loop {
        let outcome = pump_record(&mut reader, &mut buf, cell);
        match &outcome {
            Ok(Some(sample)) => trace!("{name}: sample x={} y={}", sample.x, sample.y),
            Ok(None) | Err(RecordError::Empty) => {}
            Err(e) if e.is_timeout() => trace!("{name}: read timed out"),
            Err(e) => debug!("{name}: discarded record: {e}"),
        }
        if let Some(pause) = pause_after(&outcome) {
            thread::sleep(pause);
        }
    }
}

/// How long the reader waits before its next read.
///
/// End of stream and hard I/O errors (an unplugged device fails every read
/// at once) would otherwise spin the thread. Timeouts already waited.
fn pause_after(outcome: &Result<Option<OrientationSample>, RecordError>) -> Option<Duration> {
    match outcome {
        Ok(None) => Some(Duration::from_millis(END_OF_STREAM_IDLE_MS)),
        Err(e @ RecordError::Io(_)) if !e.is_timeout() => {
            Some(Duration::from_millis(READ_ERROR_BACKOFF_MS))
        }
        _ => None,
    }
}
