//! Scheduled departures.

use std::fmt;

use super::{ClockTime, Station};

/// A scheduled trip between two stations.
///
/// `min_waiting_time` is the dwell a traveler must allow around this trip
/// before continuing; the planner adds it to the wait for boarding.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub source: Station,
    pub destination: Station,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub price: f64,
    pub min_waiting_time: i64,
}

impl Departure {
    pub fn new(
        source: Station,
        destination: Station,
        departure_time: ClockTime,
        arrival_time: ClockTime,
        price: f64,
        min_waiting_time: i64,
    ) -> Self {
        Self {
            source,
            destination,
            departure_time,
            arrival_time,
            price,
            min_waiting_time,
        }
    }

    /// Build a departure from its start time and duration.
    ///
    /// The arrival clock wraps past midnight.
    pub fn with_duration(
        source: Station,
        destination: Station,
        departure_time: ClockTime,
        duration_mins: i64,
        price: f64,
        min_waiting_time: i64,
    ) -> Self {
        let arrival_time = departure_time.plus_minutes(duration_mins);
        Self::new(
            source,
            destination,
            departure_time,
            arrival_time,
            price,
            min_waiting_time,
        )
    }

    /// Travel time in minutes, `arrival - departure` on the same day.
    ///
    /// A trip whose arrival wraps past midnight comes out negative and is
    /// skipped by the time/cost search.
    pub fn travel_time(&self) -> i64 {
        self.arrival_time.signed_minutes_since(self.departure_time)
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} to {}, {:.2})",
            self.source.id(),
            self.destination.id(),
            self.departure_time,
            self.arrival_time,
            self.price
        )
    }
}
