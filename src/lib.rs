//! Rotolog - severity-tagged logging with size-rotated daily log files
//!
//! A [`Logger`] accepts text messages tagged with a [`Severity`], filters
//! them against a configured limit, formats them with severity and time
//! prefixes, optionally echoes them to the console, appends them to flat
//! log files rotated by byte size, and fans them out to registered
//! [`Receive`] observers.
//!
//! Log files live directly in the configured directory and are named after
//! the local date: `2022-3-22.log`, then `2022-3-22_2.log` once the first
//! reaches the size limit, and so on. The rotation index is never cached;
//! the target file is re-derived by probing the directory on every write.
//!
//! ```no_run
//! use rotolog::{Logger, LoggerConfig, Severity};
//!
//! let logger = Logger::new();
//! let mut config = LoggerConfig::new("logs");
//! config.print_to_console = true;
//! config.severity_limit = Severity::Trace;
//! logger.init_with(config);
//!
//! logger.log_info("service started")?;
//! logger.log_debug("handshake payload", file!(), line!())?;
//! # Ok::<(), rotolog::Error>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod receiver;
pub mod rotation;
pub mod severity;

pub use clock::{Clock, SystemClock, Timestamp};
pub use config::{app_data_path, LoggerConfig, DEFAULT_SIZE_LIMIT_BYTES};
pub use error::{Error, Result};
pub use logger::Logger;
pub use receiver::{Receive, ReceiverRegistry};
pub use severity::Severity;
