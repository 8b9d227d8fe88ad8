//! Transfer classification.
//!
//! A route state remembers the station where the traveller last boarded a
//! scheduled vehicle. Taking a scheduled trip from any other station means
//! the traveller changed vehicles.

use crate::domain::StationId;
use crate::graph::Connection;

/// Result of classifying one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boarding {
    pub is_transfer: bool,
    /// Last-boarded station after taking the edge.
    pub last_boarded: StationId,
}

/// Classify `connection` taken from a state whose last boarding was at
/// `last_boarded`.
///
/// Transfer edges always count and leave the last-boarded station alone.
/// A travel edge counts when it leaves from somewhere other than the
/// last-boarded station, and moves the last-boarded station to its source.
pub fn classify_boarding(connection: &Connection, last_boarded: &StationId) -> Boarding {
    if connection.is_transfer() {
        return Boarding {
            is_transfer: true,
            last_boarded: last_boarded.clone(),
        };
    }

    let source = connection.source().id();
    if source != last_boarded {
        Boarding {
            is_transfer: true,
            last_boarded: source.clone(),
        }
    } else {
        Boarding {
            is_transfer: false,
            last_boarded: last_boarded.clone(),
        }
    }
}
