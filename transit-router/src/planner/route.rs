//! Route results.

use std::fmt;

use crate::domain::Station;
use crate::graph::Connection;

/// A complete path from a source station to a destination station.
///
/// Each connection is paired with the minutes waited before taking it.
/// Totals are fixed when the route is produced:
///
/// - `total_cost` is the sum of connection costs.
/// - `total_time` is travel plus waiting time, floored at zero.
/// - `transfers` counts the connections the search classified as transfers.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    connections: Vec<Connection>,
    waiting_times: Vec<i64>,
    total_cost: f64,
    total_time: i64,
    transfers: u32,
}

impl Route {
    /// Create a route, deriving cost and time totals from its connections.
    ///
    /// # Panics
    ///
    /// Panics if `waiting_times` and `connections` differ in length.
    pub(crate) fn new(
        connections: Vec<Connection>,
        waiting_times: Vec<i64>,
        transfers: u32,
    ) -> Self {
        assert_eq!(
            connections.len(),
            waiting_times.len(),
            "one waiting time per connection"
        );

        let total_cost = connections.iter().map(Connection::cost).sum();
        let total_time = connections
            .iter()
            .map(Connection::travel_time)
            .chain(waiting_times.iter().copied())
            .fold(0i64, i64::saturating_add);

        Self {
            connections,
            waiting_times,
            total_cost,
            total_time: total_time.max(0),
            transfers,
        }
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Minutes waited before each connection.
    pub fn waiting_times(&self) -> &[i64] {
        &self.waiting_times
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Minutes.
    pub fn total_time(&self) -> i64 {
        self.total_time
    }

    pub fn transfers(&self) -> u32 {
        self.transfers
    }

    /// First station of the route, `None` for an empty route.
    pub fn origin(&self) -> Option<&Station> {
        self.connections.first().map(Connection::source)
    }

    /// Last station of the route, `None` for an empty route.
    pub fn destination(&self) -> Option<&Station> {
        self.connections.last().map(Connection::destination)
    }

    /// True when source and destination coincide and no edge was taken.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (conn, waiting) in self.connections.iter().zip(&self.waiting_times) {
            match conn.departure() {
                None => writeln!(
                    f,
                    "Transfer: {} -> {} ({:.2}, {} min, waiting {} min)",
                    conn.source().id(),
                    conn.destination().id(),
                    conn.cost(),
                    conn.travel_time(),
                    waiting
                )?,
                Some(dep) => writeln!(
                    f,
                    "Travel: {} -> {} ({} to {}, {:.2}, {} min, waiting {} min)",
                    conn.source().id(),
                    conn.destination().id(),
                    dep.departure_time,
                    dep.arrival_time,
                    conn.cost(),
                    conn.travel_time(),
                    waiting
                )?,
            }
        }
        write!(
            f,
            "Total: {:.2}, {} min, {} transfers",
            self.total_cost, self.total_time, self.transfers
        )
    }
}
