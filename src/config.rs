//! Logger configuration and platform path derivation.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::severity::Severity;

/// Default log file size limit: 1 MiB.
pub const DEFAULT_SIZE_LIMIT_BYTES: u64 = 1_048_576;

/// Full configuration of a [`Logger`](crate::Logger).
///
/// Every `init` variant replaces the whole configuration; fields a variant
/// does not expose take the defaults documented on [`LoggerConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Directory the rotated log files live in.
    pub log_dir: PathBuf,
    /// Echo every accepted record to standard output.
    pub print_to_console: bool,
    /// Least restrictive severity that is still emitted.
    pub severity_limit: Severity,
    /// Byte size at which a log file stops receiving appends.
    pub size_limit_bytes: u64,
}

impl LoggerConfig {
    /// Configuration for `log_dir` with the default options: no console
    /// echo, severity limit `Error`, size limit 1 MiB.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            print_to_console: false,
            severity_limit: Severity::Error,
            size_limit_bytes: DEFAULT_SIZE_LIMIT_BYTES,
        }
    }
}

/// Derive the log directory for an application identity.
///
/// Returns `{platform user data root}/{domain}/{application}/logs`; the
/// domain segment is omitted entirely when `domain` is empty. The root is the
/// roaming `AppData` folder on Windows and `~/.local/share` on Linux.
pub fn app_data_path(application: &str, domain: &str) -> Result<PathBuf> {
    let mut path = dirs::data_dir().ok_or(Error::EnvironmentUnavailable)?;
    if !domain.is_empty() {
        path.push(domain);
    }
    path.push(application);
    path.push("logs");
    Ok(path)
}
