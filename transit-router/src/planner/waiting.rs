//! Waiting-time model.

use tracing::debug;

use crate::domain::ClockTime;
use crate::graph::{Connection, ConnectionKind};

/// Wait charged for a transfer edge whose own duration is not positive.
pub const DEFAULT_TRANSFER_WAIT_MINS: i64 = 10;

/// Minimum boarding wait used when a departure does not supply one.
pub const DEFAULT_MIN_WAIT_MINS: i64 = 5;

/// Minutes spent waiting at the current station before taking `connection`.
///
/// A transfer edge waits for its own duration. A travel edge waits until the
/// next occurrence of its departure time (possibly the following day), plus
/// the departure's minimum boarding wait.
///
/// # Examples
///
/// With the clock at 08:00 and a departure at 08:10 requiring five minutes to
/// board, the wait is 15 minutes. With the clock at 09:00 the same departure
/// is only caught the next day, 23h15m later.
///
/// Missing durations and waits are warned about once when the graph is built,
/// so substitution here only logs at debug level.
pub fn waiting_time(connection: &Connection, clock: ClockTime) -> i64 {
    match connection.kind() {
        ConnectionKind::Transfer => {
            let duration = connection.travel_time();
            if duration > 0 {
                duration
            } else {
                debug!(
                    from = %connection.source().id(),
                    to = %connection.destination().id(),
                    duration,
                    "transfer has no positive duration, using default wait"
                );
                DEFAULT_TRANSFER_WAIT_MINS
            }
        }
        ConnectionKind::Travel(departure) => {
            let min_wait = if departure.min_waiting_time > 0 {
                departure.min_waiting_time
            } else {
                debug!(
                    from = %departure.source.id(),
                    at = %departure.departure_time,
                    "departure has no positive minimum wait, using default"
                );
                DEFAULT_MIN_WAIT_MINS
            };
            clock
                .minutes_until(departure.departure_time)
                .saturating_add(min_wait)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityId, Departure, Station, StationId, StationKind};
    use std::sync::Arc;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn station(id: &str, city: &str) -> Station {
        Station::new(
            StationId::parse(id).unwrap(),
            CityId::parse(city).unwrap(),
            StationKind::Bus,
        )
    }

    fn trip(at: &str, min_wait: i64) -> Connection {
        Connection::travel(Arc::new(Departure::with_duration(
            station("A_0_0", "G_0_0"),
            station("A_0_1", "G_0_1"),
            t(at),
            30,
            120.0,
            min_wait,
        )))
    }

    fn transfer(duration: i64) -> Connection {
        Connection::transfer(
            station("A_0_0", "G_0_0"),
            station("Z_0_0", "G_0_0"),
            5.0,
            duration,
        )
    }

    #[test]
    fn travel_waits_until_departure_plus_boarding() {
        assert_eq!(waiting_time(&trip("08:10", 5), t("08:00")), 15);
    }

    #[test]
    fn travel_on_the_minute() {
        assert_eq!(waiting_time(&trip("08:10", 5), t("08:10")), 5);
    }

    #[test]
    fn missed_departure_waits_for_next_day() {
        assert_eq!(waiting_time(&trip("08:10", 5), t("09:00")), 23 * 60 + 10 + 5);
    }

    #[test]
    fn missing_min_wait_uses_default() {
        assert_eq!(waiting_time(&trip("08:10", 0), t("08:00")), 10 + DEFAULT_MIN_WAIT_MINS);
        assert_eq!(waiting_time(&trip("08:10", -3), t("08:00")), 10 + DEFAULT_MIN_WAIT_MINS);
    }

    #[test]
    fn huge_min_wait_saturates() {
        assert_eq!(waiting_time(&trip("08:10", i64::MAX), t("08:00")), i64::MAX);
    }

    #[test]
    fn transfer_waits_for_its_duration() {
        assert_eq!(waiting_time(&transfer(10), t("08:00")), 10);
        assert_eq!(waiting_time(&transfer(3), t("23:59")), 3);
    }

    #[test]
    fn non_positive_transfer_uses_default() {
        assert_eq!(waiting_time(&transfer(0), t("08:00")), DEFAULT_TRANSFER_WAIT_MINS);
        assert_eq!(waiting_time(&transfer(-4), t("08:00")), DEFAULT_TRANSFER_WAIT_MINS);
    }
}
