//! Log severity levels.

use std::fmt;

/// Importance level attached to every log message.
///
/// The declared order doubles as the filter order: a message is emitted only
/// when its severity is at or below the configured limit. With the default
/// limit of `Error`, info, warning and error messages pass while debug and
/// trace messages are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info = 0,
    Warning = 1,
    Error = 2,
    Debug = 3,
    Trace = 4,
}

impl Severity {
    /// Bracketed tag used in formatted output.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Info => "[INFO]",
            Severity::Warning => "[WARNING]",
            Severity::Error => "[ERROR]",
            Severity::Debug => "[DEBUG]",
            Severity::Trace => "[TRACE]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
