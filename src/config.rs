//! Runtime configuration and command-line parsing.

use crate::core::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_READ_TIMEOUT_MS, MIN_SPAWN_INTERVAL_SECONDS, SPAWN_INTERVAL_SECONDS,
};
use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

#[cfg(windows)]
pub const DEFAULT_DEVICE: &str = "COM4";
#[cfg(not(windows))]
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

pub const USAGE: &str = "\
Aviate - tilt-steered flight avoidance

Usage: aviate [options]

Options:
  --device <addr>          Serial device of the motion sensor
  --baud <rate>            Serial baud rate (default 19200)
  --timeout-ms <ms>        Serial read timeout, at least 1 (default 1000)
  --replay <file>          Read sensor records from a file instead of a device
  --seed <n>               Seed for obstacle placement
  --spawn-interval <secs>  Seconds between birds (default 0.7)
  --log-file <path>        Write logs to a file (RUST_LOG sets the level)
  --version                Show version information
  --help                   Show this help message";

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Serial device address (e.g. `/dev/ttyUSB0`, `COM4`)
    pub device: String,

    pub baud_rate: u32,

    /// Serial read timeout; expiry is treated like a bad record
    pub read_timeout: Duration,

    /// Recorded sensor log to read instead of the device
    pub replay: Option<PathBuf>,

    /// Random seed for obstacle placement (None = random)
    pub seed: Option<u64>,

    /// Seconds of game time between spawns
    pub spawn_interval: f64,

    /// Log destination (None = stderr)
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            replay: None,
            seed: None,
            spawn_interval: SPAWN_INTERVAL_SECONDS,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Play back a recorded sensor log
    pub fn replay(path: impl Into<PathBuf>) -> Self {
        Self {
            replay: Some(path.into()),
            ..Default::default()
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(GameConfig),
    Help,
    Version,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = GameConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--device" => config.device = value(&mut args, "--device")?,
            "--baud" => config.baud_rate = parse_value(&mut args, "--baud")?,
            "--timeout-ms" => {
                let ms: u64 = parse_value(&mut args, "--timeout-ms")?;
                // A zero timeout turns every read into an instant failure.
                if ms == 0 {
                    return Err(ConfigError::InvalidValue {
                        flag: "--timeout-ms",
                        value: ms.to_string(),
                    });
                }
                config.read_timeout = Duration::from_millis(ms);
            }
            "--replay" => config.replay = Some(PathBuf::from(value(&mut args, "--replay")?)),
            "--seed" => config.seed = Some(parse_value(&mut args, "--seed")?),
            "--spawn-interval" => {
                let raw = value(&mut args, "--spawn-interval")?;
                match raw.parse::<f64>() {
                    Ok(secs) if secs.is_finite() && secs >= MIN_SPAWN_INTERVAL_SECONDS => {
                        config.spawn_interval = secs;
                    }
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            flag: "--spawn-interval",
                            value: raw,
                        })
                    }
                }
            }
            "--log-file" => config.log_file = Some(PathBuf::from(value(&mut args, "--log-file")?)),
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    Ok(Command::Run(config))
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &'static str) -> Result<String, ConfigError> {
    args.next().ok_or(ConfigError::MissingValue(flag))
}

fn parse_value<T, I>(args: &mut I, flag: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    I: Iterator<Item = String>,
{
    let raw = value(args, flag)?;
    raw.parse()
        .map_err(|_| ConfigError::InvalidValue { flag, value: raw })
}
