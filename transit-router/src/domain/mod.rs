//! Domain types for the transit route planner.
//!
//! This module contains the schedule model: stations, cities, clock times
//! and departures. Identifiers and times are validated at construction, so
//! code that receives these types can trust their validity.

mod departure;
mod error;
mod station;
mod time;

pub use departure::Departure;
pub use error::DomainError;
pub use station::{CityId, Station, StationId, StationKind};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
