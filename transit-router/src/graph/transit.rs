//! Adjacency structure over stations.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Departure, Station, StationId};

use super::Connection;

/// Directed graph of stations and their outgoing connections.
///
/// Each station's edges keep insertion order, so searches are
/// deterministic. Every station referenced by a connection is itself a node,
/// possibly with no outgoing edges.
///
/// The graph is built once and then shared read-only between queries.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    index: HashMap<StationId, usize>,
    /// Outgoing edges, indexed through `index`.
    nodes: Vec<Vec<Connection>>,
}

impl TransitGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `station` has an entry. Adding a known station is a no-op.
    pub fn add_station(&mut self, station: Station) {
        self.node_index(station.id());
    }

    /// Register a scheduled departure as a travel edge.
    ///
    /// Both endpoints are added as stations.
    pub fn add_connection(&mut self, departure: Departure) {
        let departure = Arc::new(departure);
        let source = self.node_index(departure.source.id());
        self.node_index(departure.destination.id());

        self.nodes[source].push(Connection::travel(departure));
    }

    /// Append a transfer edge `source -> destination`.
    ///
    /// Call twice, once per direction, for a bidirectional transfer.
    pub fn add_transfer_edge(
        &mut self,
        source: &Station,
        destination: &Station,
        cost: f64,
        travel_time: i64,
    ) {
        let from = self.node_index(source.id());
        self.node_index(destination.id());

        self.nodes[from].push(Connection::transfer(
            source.clone(),
            destination.clone(),
            cost,
            travel_time,
        ));
    }

    /// Outgoing edges of `station`, empty if it is unknown or has none.
    pub fn connections_from(&self, station: &StationId) -> &[Connection] {
        self.index
            .get(station)
            .map(|&idx| self.nodes[idx].as_slice())
            .unwrap_or_default()
    }

    pub fn station_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges across all stations.
    pub fn connection_count(&self) -> usize {
        self.nodes.iter().map(Vec::len).sum()
    }

    fn node_index(&mut self, station: &StationId) -> usize {
        if let Some(&idx) = self.index.get(station) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(station.clone(), idx);
        self.nodes.push(Vec::new());
        idx
    }
}
