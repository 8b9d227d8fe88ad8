//! Graph edges.

use std::sync::Arc;

use crate::domain::{Departure, Station};

/// What an edge represents.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionKind {
    /// Derived 1:1 from a scheduled departure.
    Travel(Arc<Departure>),
    /// Synthetic same-city hop between the bus and train station.
    Transfer,
}

/// A directed edge of the transit graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    source: Station,
    destination: Station,
    cost: f64,
    travel_time: i64,
    kind: ConnectionKind,
}

impl Connection {
    /// Travel edge for a scheduled departure.
    pub fn travel(departure: Arc<Departure>) -> Self {
        Self {
            source: departure.source.clone(),
            destination: departure.destination.clone(),
            cost: departure.price,
            travel_time: departure.travel_time(),
            kind: ConnectionKind::Travel(departure),
        }
    }

    /// Transfer edge with a flat cost and duration.
    pub fn transfer(source: Station, destination: Station, cost: f64, travel_time: i64) -> Self {
        Self {
            source,
            destination,
            cost,
            travel_time,
            kind: ConnectionKind::Transfer,
        }
    }

    pub fn source(&self) -> &Station {
        &self.source
    }

    pub fn destination(&self) -> &Station {
        &self.destination
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Duration in minutes.
    pub fn travel_time(&self) -> i64 {
        self.travel_time
    }

    pub fn kind(&self) -> &ConnectionKind {
        &self.kind
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self.kind, ConnectionKind::Transfer)
    }

    /// The originating departure; `None` for transfer edges.
    pub fn departure(&self) -> Option<&Departure> {
        match &self.kind {
            ConnectionKind::Travel(departure) => Some(departure),
            ConnectionKind::Transfer => None,
        }
    }
}
