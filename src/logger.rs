//! The logger facade: configuration lifecycle, severity filtering and
//! dispatch to the console, file and receiver sinks.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::clock::{Clock, SystemClock};
use crate::config::{app_data_path, LoggerConfig};
use crate::error::{Error, Result};
use crate::format;
use crate::receiver::{Receive, ReceiverRegistry};
use crate::rotation;
use crate::severity::Severity;

struct LoggerState {
    initialized: bool,
    config: LoggerConfig,
    receivers: ReceiverRegistry,
}

/// Process-wide logging facade.
///
/// The hosting application constructs one `Logger` and shares it by
/// reference; all methods take `&self`. A logger starts uninitialized and
/// rejects `log` calls until one of the `init` variants runs.
///
/// One coarse lock covers each `log` call end to end, so configuration
/// reads, the rotation probe/append window and receiver notification stay
/// consistent when the logger is shared across threads. Two racing callers
/// cannot both append past the size limit.
pub struct Logger {
    state: Mutex<LoggerState>,
    clock: Box<dyn Clock>,
}

impl Logger {
    /// Logger on the system clock, uninitialized.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Logger with a caller-supplied time source.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                initialized: false,
                config: LoggerConfig::new(PathBuf::new()),
                receivers: ReceiverRegistry::new(),
            }),
            clock,
        }
    }

    /// Initialize with a log directory; all other options take defaults.
    pub fn init(&self, log_dir: impl Into<PathBuf>) {
        self.init_with(LoggerConfig::new(log_dir));
    }

    /// Initialize with full configuration, replacing every previous value.
    pub fn init_with(&self, config: LoggerConfig) {
        let mut state = self.lock();
        state.config = config;
        state.initialized = true;
    }

    /// Initialize for an application identity with default options.
    ///
    /// The log directory is derived from the platform user-data root via
    /// [`app_data_path`]; fails with [`Error::EnvironmentUnavailable`] when
    /// that root cannot be determined.
    pub fn init_for_app(&self, application: &str, domain: &str) -> Result<()> {
        let log_dir = app_data_path(application, domain)?;
        self.init_with(LoggerConfig::new(log_dir));
        Ok(())
    }

    /// Initialize for an application identity with explicit options.
    pub fn init_for_app_with(
        &self,
        application: &str,
        domain: &str,
        print_to_console: bool,
        severity_limit: Severity,
        size_limit_bytes: u64,
    ) -> Result<()> {
        let log_dir = app_data_path(application, domain)?;
        self.init_with(LoggerConfig {
            log_dir,
            print_to_console,
            severity_limit,
            size_limit_bytes,
        });
        Ok(())
    }

    /// Clear the initialized flag.
    ///
    /// Configuration values are kept, but `log` calls are rejected with
    /// [`Error::NotInitialized`] until the next `init`.
    pub fn uninitialize(&self) {
        self.lock().initialized = false;
    }

    /// Accept one message at the given severity.
    ///
    /// Messages above the configured severity limit are dropped silently
    /// with no side effects. Accepted messages are formatted once, echoed to
    /// the console when enabled (best effort), appended to the current
    /// rotation target, and finally fanned out to the receivers with the
    /// original unprefixed text. A storage failure aborts the dispatch
    /// before the receivers run.
    pub fn log(&self, message: &str, severity: Severity) -> Result<()> {
        let state = self.lock();

        if !state.initialized {
            return Err(Error::NotInitialized);
        }
        if severity > state.config.severity_limit {
            return Ok(());
        }

        let timestamp = self.clock.now();
        let line = format::full_line(message, severity, &timestamp);

        if state.config.print_to_console {
            write_console(&line);
        }

        let base = format::date_base(&timestamp);
        let target = rotation::resolve_target_file(
            &state.config.log_dir,
            &base,
            state.config.size_limit_bytes,
        )?;
        rotation::append_line(&target, &line)?;

        state.receivers.notify_all(message);
        Ok(())
    }

    pub fn log_info(&self, message: &str) -> Result<()> {
        self.log(message, Severity::Info)
    }

    pub fn log_warning(&self, message: &str) -> Result<()> {
        self.log(message, Severity::Warning)
    }

    pub fn log_error(&self, message: &str) -> Result<()> {
        self.log(message, Severity::Error)
    }

    /// Log at debug severity with the call site appended to the message.
    pub fn log_debug(&self, message: &str, source_file: &str, line: u32) -> Result<()> {
        let detailed = format::with_source_detail(message, source_file, line);
        self.log(&detailed, Severity::Debug)
    }

    /// Log at trace severity with the call site appended to the message.
    pub fn log_trace(&self, message: &str, source_file: &str, line: u32) -> Result<()> {
        let detailed = format::with_source_detail(message, source_file, line);
        self.log(&detailed, Severity::Trace)
    }

    /// Register a receiver; duplicates are allowed and notified once per
    /// registration.
    pub fn add_receiver(&self, receiver: Arc<dyn Receive>) {
        self.lock().receivers.add(receiver);
    }

    /// Remove the first registration of `receiver`; absent handles are a
    /// no-op.
    pub fn remove_receiver(&self, receiver: &Arc<dyn Receive>) {
        self.lock().receivers.remove(receiver);
    }

    pub fn clear_receivers(&self) {
        self.lock().receivers.clear();
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        // A panicking receiver poisons the lock; the state itself is still
        // consistent, so recover rather than propagate the poison.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Console echo is best effort: a failed stdout write is warned about, never
/// surfaced to the `log` caller.
fn write_console(line: &str) {
    let mut stdout = io::stdout();
    if let Err(err) = writeln!(stdout, "{line}") {
        tracing::warn!("console log write failed: {err}");
    }
}
