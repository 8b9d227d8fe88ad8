//! Clock-time handling for schedules.
//!
//! Timetables carry times as "HH:MM" strings with no date attached. Trips
//! never span days, so a time of day on a 24-hour wrap-around clock is all
//! the planner needs.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day on a 24-hour wrap-around clock.
///
/// # Examples
///
/// ```
/// use transit_router::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert_eq!(t.minute_of_day(), 14 * 60 + 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Midnight, 00:00.
    pub const MIDNIGHT: ClockTime = ClockTime(NaiveTime::MIN);

    /// Create a clock time from hour and minute, if valid.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(&self) -> i64 {
        i64::from(self.hour()) * 60 + i64::from(self.minute())
    }

    /// Advance the clock by `minutes`, wrapping past midnight.
    ///
    /// Any `i64` is accepted. Whole days are dropped before the addition.
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        let offset = Duration::minutes(minutes.rem_euclid(MINUTES_PER_DAY));
        let (time, _) = self.0.overflowing_add_signed(offset);
        Self(time)
    }

    /// Minutes to wait from `self` until the clock next shows `later`.
    ///
    /// A target earlier in the day than `self` is reached the following day,
    /// so the result is always in `0..1440`.
    pub fn minutes_until(&self, later: ClockTime) -> i64 {
        (later.minute_of_day() - self.minute_of_day()).rem_euclid(MINUTES_PER_DAY)
    }

    /// Signed minutes from `earlier` to `self`, without wrapping.
    pub fn signed_minutes_since(&self, earlier: ClockTime) -> i64 {
        self.minute_of_day() - earlier.minute_of_day()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
