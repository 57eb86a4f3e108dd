//! Wall-clock abstraction.
//!
//! The logger takes one [`Timestamp`] per log call from a [`Clock`], so tests
//! and hosts with their own time source can swap the system clock out.

use chrono::{Datelike, Local, Timelike};

/// A calendar date and time split into plain integer fields.
///
/// No timezone is carried; the system clock produces local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let now = Local::now();
        Timestamp {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}
