//! Harness configuration
//!
//! The only knob is the log level, taken from `UNIT_LOG`. On host it is
//! read from the process environment; on target it is baked in from the
//! build environment.

use core::fmt;
use core::str::FromStr;
use log::LevelFilter;

/// Quiet enough that a passing run prints nothing.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Error {
    InvalidLogLevel,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidLogLevel => f.write_str("UNIT_LOG is not a log level"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Build from an optional `UNIT_LOG` value; unset means defaults.
    pub fn parse(log_level: Option<&str>) -> Result<Self, Error> {
        let log_level = match log_level.map(str::trim) {
            None | Some("") => DEFAULT_LOG_LEVEL,
            Some(level) => LevelFilter::from_str(level).map_err(|_| Error::InvalidLogLevel)?,
        };
        Ok(Config { log_level })
    }

    #[cfg(not(all(target_arch = "arm", target_os = "none")))]
    pub fn from_env() -> Result<Self, Error> {
        let log_level = std::env::var("UNIT_LOG").ok();
        Config::parse(log_level.as_deref())
    }

    #[cfg(all(target_arch = "arm", target_os = "none"))]
    pub fn from_env() -> Result<Self, Error> {
        Config::parse(option_env!("UNIT_LOG"))
    }
}
