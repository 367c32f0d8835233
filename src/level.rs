use std::fmt;

use crate::error::ConfigError;

/// Severity of a log message.
///
/// Levels are ordered from lowest to highest priority by their integer value.
/// Enabling a level on a logger also enables every higher level, so a `Debug`
/// logger writes `Debug`, `Info`, `Warn` and `Error` messages but drops `Fine`.
///
/// `Off` is never the level of a message. As a threshold it means nothing is
/// logged, which is why [`Logger`](crate::Logger) refuses it at construction.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Fine granularity messages.
    Fine = 10,
    /// Debug messages.
    Debug = 20,
    /// Informative messages.
    Info = 30,
    /// Warnings.
    Warn = 40,
    /// Errors.
    Error = 50,
    /// Turns logging off.
    Off = 99,
}

impl Level {
    /// The levels a message can be logged at, lowest first.
    pub const ACTIVE: [Level; 5] = [
        Level::Fine,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Fine => "Fine",
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
            Level::Off => "Off",
        }
    }

    /// Name of a raw level value, `"Unknown"` when it matches no level.
    pub fn name_of(value: i32) -> &'static str {
        Level::try_from(value).map_or("Unknown", Level::name)
    }

    /// Fixed width tag written in front of the message.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Level::Fine => "[FINE]  ",
            Level::Debug => "[DEBUG] ",
            Level::Info => "[INFO]  ",
            Level::Warn => "[WARN]  ",
            Level::Error => "[ERROR] ",
            Level::Off => "",
        }
    }

    /// The matching `log` facade level. `Fine` is reported as `Trace`.
    pub fn as_log_level(self) -> Option<log::Level> {
        match self {
            Level::Fine => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error => Some(log::Level::Error),
            Level::Off => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Level {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, ConfigError> {
        match value {
            10 => Ok(Level::Fine),
            20 => Ok(Level::Debug),
            30 => Ok(Level::Info),
            40 => Ok(Level::Warn),
            50 => Ok(Level::Error),
            99 => Ok(Level::Off),
            other => Err(ConfigError::UnknownLevel(other)),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Fine,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        level
            .as_log_level()
            .map_or(log::LevelFilter::Off, |l| l.to_level_filter())
    }
}
