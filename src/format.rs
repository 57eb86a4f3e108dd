//! Message formatting helpers.
//!
//! Pure functions over severities and timestamps. The logger concatenates
//! their output without any additional separators, so the embedded tabs are
//! the whole record layout.

use crate::clock::Timestamp;
use crate::severity::Severity;

/// Severity tag padded with tabs so the time column lines up across levels.
pub fn severity_prefix(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "[INFO]\t\t",
        Severity::Warning => "[WARNING]\t",
        Severity::Error => "[ERROR]\t\t",
        Severity::Debug => "[DEBUG]\t\t",
        Severity::Trace => "[TRACE]\t\t",
    }
}

/// `"11:32:53\t\t"` — fields are plain decimals, never zero-padded.
pub fn time_prefix(ts: &Timestamp) -> String {
    format!("{}:{}:{}\t\t", ts.hour, ts.minute, ts.second)
}

/// `"2022-3-22"` — unpadded, used as the base of rotated file names.
pub fn date_base(ts: &Timestamp) -> String {
    format!("{}-{}-{}", ts.year, ts.month, ts.day)
}

/// Append source-location detail to a message.
///
/// Used by the debug and trace entry points, which carry the call site along
/// with the message.
pub fn with_source_detail(message: &str, source_file: &str, line: u32) -> String {
    format!("{message}\t\tSOURCE: {source_file}\t\tLINE: {line}")
}

/// The exact record written to console and file; the trailing newline is
/// added by the sink.
pub fn full_line(message: &str, severity: Severity, ts: &Timestamp) -> String {
    format!("{}{}{}", severity_prefix(severity), time_prefix(ts), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_timestamp() -> Timestamp {
        Timestamp {
            year: 2022,
            month: 3,
            day: 22,
            hour: 11,
            minute: 32,
            second: 53,
        }
    }

    #[test]
    fn test_severity_prefix_exact_tabs() {
        assert_eq!(severity_prefix(Severity::Info), "[INFO]\t\t");
        assert_eq!(severity_prefix(Severity::Warning), "[WARNING]\t");
        assert_eq!(severity_prefix(Severity::Error), "[ERROR]\t\t");
        assert_eq!(severity_prefix(Severity::Debug), "[DEBUG]\t\t");
        assert_eq!(severity_prefix(Severity::Trace), "[TRACE]\t\t");
    }

    #[test]
    fn test_time_prefix_is_unpadded() {
        assert_eq!(time_prefix(&test_timestamp()), "11:32:53\t\t");

        let early = Timestamp {
            hour: 9,
            minute: 5,
            second: 7,
            ..test_timestamp()
        };
        assert_eq!(time_prefix(&early), "9:5:7\t\t");
    }

    #[test]
    fn test_date_base_is_unpadded() {
        assert_eq!(date_base(&test_timestamp()), "2022-3-22");
    }

    #[test]
    fn test_with_source_detail() {
        assert_eq!(
            with_source_detail("boom", "src/main.rs", 42),
            "boom\t\tSOURCE: src/main.rs\t\tLINE: 42"
        );
    }

    #[test]
    fn test_full_line_concatenation() {
        let line = full_line("This is a test", Severity::Info, &test_timestamp());
        assert_eq!(line, "[INFO]\t\t11:32:53\t\tThis is a test");

        let line = full_line("careful", Severity::Warning, &test_timestamp());
        assert_eq!(line, "[WARNING]\t11:32:53\t\tcareful");
    }
}
