use thiserror::Error;

/// Errors raised while building a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No output sink was supplied.
    #[error("no output sink was supplied")]
    MissingSink,

    /// `Off` only disables logging, it cannot be a logger threshold.
    #[error("logging level Off cannot be used as a logger threshold")]
    ThresholdOff,

    /// The integer does not match any logging level.
    #[error("{0} is not a logging level")]
    UnknownLevel(i32),
}
