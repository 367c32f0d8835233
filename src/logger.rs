//! Leveled logging over any [`std::io::Write`] sink.
//!
//! A [`Logger`] drops messages below its threshold [`Level`] and writes the rest
//! as single timestamped lines:
//!
//! ```text
//! 2024/05/01 13:04:05.123456 UTC [INFO]  hello world
//! ```
//!
//! The timestamp is UTC, marked by the `UTC ` label, unless the logger was
//! built to use local time. Nothing here is global: every logger is an
//! independent value, and applications that want the `log` facade routed
//! through one install it themselves.

mod error;
mod level;

pub use error::ConfigError;
pub use level::Level;

use chrono::{Local, Utc};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Writes messages at or above a threshold level to a sink.
///
/// The sink sits behind a mutex and each line goes out in one `write_all`, so
/// lines from concurrent callers never interleave.
pub struct Logger<W: Write> {
    out: Mutex<W>,
    level: Level,
    use_local_time: bool,
    // "UTC " when logging in UTC, empty when using local time.
    time_suffix: &'static str,
}

impl<W: Write> Logger<W> {
    /// Creates a logger writing messages of `level` and above to `out`.
    ///
    /// Fails with [`ConfigError::ThresholdOff`] for [`Level::Off`]; use the
    /// error (or `.ok()`) as the "logging disabled" case.
    pub fn new(out: W, level: Level, use_local_time: bool) -> Result<Self, ConfigError> {
        Self::from_option(Some(out), level, use_local_time)
    }

    /// Like [`Logger::new`], failing with [`ConfigError::MissingSink`] when
    /// there is no sink.
    pub fn from_option(
        out: Option<W>,
        level: Level,
        use_local_time: bool,
    ) -> Result<Self, ConfigError> {
        let out = out.ok_or(ConfigError::MissingSink)?;
        if level == Level::Off {
            return Err(ConfigError::ThresholdOff);
        }

        let time_suffix = if use_local_time { "" } else { "UTC " };
        Ok(Self {
            out: Mutex::new(out),
            level,
            use_local_time,
            time_suffix,
        })
    }

    /// Like [`Logger::new`] for a raw level value, which must match one of
    /// the levels exactly.
    pub fn from_raw_level(out: W, level: i32, use_local_time: bool) -> Result<Self, ConfigError> {
        Self::new(out, Level::try_from(level)?, use_local_time)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn uses_local_time(&self) -> bool {
        self.use_local_time
    }

    /// The label written between timestamp and level tag.
    pub fn time_zone_label(&self) -> &'static str {
        self.time_suffix
    }

    /// Filter for `log::set_max_level` when this logger backs the `log` facade.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.into()
    }

    /// Whether a message at `level` would be written.
    pub fn admits(&self, level: Level) -> bool {
        level != Level::Off && level >= self.level
    }

    /// Writes a formatted message at `level`, usually through the crate's
    /// macros.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.admits(level) {
            return;
        }
        // Write errors belong to the sink.
        let _ = self.write_line(level, &args);
    }

    /// Writes the message returned by `message` at `level`. The closure is
    /// only called when the level is admitted.
    pub fn log_with<F, S>(&self, level: Level, message: F)
    where
        F: FnOnce() -> S,
        S: fmt::Display,
    {
        if !self.admits(level) {
            return;
        }
        let _ = self.write_line(level, &message());
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink().flush()
    }

    /// Consumes the logger, returning the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn sink(&self) -> MutexGuard<'_, W> {
        // Lines go out whole, so a poisoned sink is still consistent.
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn timestamp(&self) -> String {
        if self.use_local_time {
            Local::now().format(TIME_FORMAT).to_string()
        } else {
            Utc::now().format(TIME_FORMAT).to_string()
        }
    }

    fn write_line(&self, level: Level, message: &dyn fmt::Display) -> io::Result<()> {
        let mut line = format!(
            "{} {}{}{}",
            self.timestamp(),
            self.time_suffix,
            level.label(),
            message
        );
        if !line.ends_with('\n') {
            line.push('\n');
        }
        self.sink().write_all(line.as_bytes())
    }
}

impl<W: Write> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("use_local_time", &self.use_local_time)
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send> log::Log for Logger<W> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.admits(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        Logger::log(self, record.level().into(), *record.args());
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

/// Anything messages can be logged to.
///
/// Besides [`Logger`] itself this covers `Option<Logger<_>>`, where `None`
/// means logging is disabled and every call is a no-op, the formatted and the
/// lazy form alike.
pub trait Leveled {
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    /// Logs the message produced by `message`, calling it only when the
    /// message would be written.
    fn log_with<F, S>(&self, level: Level, message: F)
    where
        F: FnOnce() -> S,
        S: fmt::Display;

    fn fine(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Fine, args)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args)
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args)
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args)
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args)
    }
}

impl<W: Write> Leveled for Logger<W> {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        Logger::log(self, level, args)
    }

    fn log_with<F, S>(&self, level: Level, message: F)
    where
        F: FnOnce() -> S,
        S: fmt::Display,
    {
        Logger::log_with(self, level, message)
    }
}

impl<T: Leveled> Leveled for Option<T> {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if let Some(logger) = self {
            logger.log(level, args);
        }
    }

    fn log_with<F, S>(&self, level: Level, message: F)
    where
        F: FnOnce() -> S,
        S: fmt::Display,
    {
        if let Some(logger) = self {
            logger.log_with(level, message);
        }
    }
}

/// Logs a formatted message at the given level.
///
/// ```
/// let lgr = logx::Logger::new(Vec::new(), logx::Level::Debug, false).unwrap();
/// logx::log!(lgr, logx::Level::Info, "hello {}", "world");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Leveled::log(&$logger, $level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fine {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Leveled::fine(&$logger, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Leveled::debug(&$logger, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Leveled::info(&$logger, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Leveled::warn(&$logger, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Leveled::error(&$logger, ::std::format_args!($($arg)+))
    };
}
