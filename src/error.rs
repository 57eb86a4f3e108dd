//! Error types for the logging facility.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while configuring the logger or writing logs.
///
/// All variants are raised synchronously from the call that detects them;
/// nothing is retried or recovered internally. A severity-filtered message is
/// a silent `Ok`, not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// `log` was called before `init`, or after `uninitialize`.
    #[error("logger is not initialized")]
    NotInitialized,

    /// The platform user-data root could not be determined during
    /// application-identity initialization.
    #[error("platform user data directory is unavailable")]
    EnvironmentUnavailable,

    /// Creating the log directory or appending to a log file failed.
    #[error("log storage failure: {0}")]
    Storage(#[from] std::io::Error),

    /// Rotation probed past the file index limit for a single day, which
    /// means the size limit is misconfigured.
    #[error("log file rotation exceeded the file index limit")]
    RotationLimitExceeded,
}
