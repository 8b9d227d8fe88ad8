//! Bounded multi-path route search.
//!
//! A best-first search that keeps up to `k` partial paths per station instead
//! of one, so that it can surface `k` distinct complete routes. States are
//! popped in weight order; ties go to the state that was queued first.
//!
//! The per-station bound is a greedy local cut: it keeps memory at
//! `O(stations * k)` but does not guarantee the true `k` best routes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{ClockTime, StationId};
use crate::graph::{Connection, TransitGraph};

use super::Criterion;
use super::frontier::BoundedFrontier;
use super::route::Route;
use super::strategy::{FewestTransfers, SearchStrategy, Weighted};
use super::transfer::classify_boarding;

/// Result of a single station-to-station search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Routes in the order they reached the destination.
    pub routes: Vec<Route>,

    /// Number of states taken off the queue.
    pub states_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            states_explored: 0,
        }
    }
}

/// A partial route ending at `station`.
#[derive(Debug, Clone)]
struct SearchState<W> {
    station: StationId,
    weight: W,
    clock: ClockTime,
    transfers: u32,
    path: Vec<Connection>,
    waiting_times: Vec<i64>,
    /// Where the current ride began.
    last_boarded: StationId,
}

/// Queue entry: min-heap on `(weight, seq)`.
#[derive(Debug)]
struct Queued<W> {
    seq: u64,
    state: SearchState<W>,
}

impl<W: Ord> PartialEq for Queued<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Ord> Eq for Queued<W> {}

impl<W: Ord> PartialOrd for Queued<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Ord> Ord for Queued<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .state
            .weight
            .cmp(&self.state.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Route search over a borrowed graph with a fixed strategy.
pub struct RouteSearch<'g, S> {
    graph: &'g TransitGraph,
    strategy: S,
}

impl<'g, S: SearchStrategy> RouteSearch<'g, S> {
    pub fn new(graph: &'g TransitGraph, strategy: S) -> Self {
        Self { graph, strategy }
    }

    /// Search for up to `k` routes from `source` to `destination`.
    ///
    /// Searching from a station to itself yields a single empty route.
    pub fn run(
        &self,
        source: &StationId,
        destination: &StationId,
        start: ClockTime,
        k: usize,
    ) -> SearchResult {
        if k == 0 {
            return SearchResult::empty();
        }

        let initial = SearchState {
            station: source.clone(),
            weight: self.strategy.initial_weight(),
            clock: start,
            transfers: 0,
            path: Vec::new(),
            waiting_times: Vec::new(),
            last_boarded: source.clone(),
        };

        let mut retained: HashMap<StationId, BoundedFrontier<S::Weight>> = HashMap::new();
        retained
            .entry(source.clone())
            .or_insert_with(|| BoundedFrontier::new(k))
            .admit(initial.weight);

        let mut queue = BinaryHeap::new();
        let mut seq = 0u64;
        queue.push(Queued {
            seq,
            state: initial,
        });

        let mut result = SearchResult::empty();

        while let Some(Queued { state, .. }) = queue.pop() {
            result.states_explored += 1;

            if &state.station == destination {
                trace!(
                    weight = ?state.weight,
                    edges = state.path.len(),
                    transfers = state.transfers,
                    "route reached destination"
                );
                result
                    .routes
                    .push(Route::new(state.path, state.waiting_times, state.transfers));
                if result.routes.len() >= k {
                    break;
                }
                continue;
            }

            for connection in self.graph.connections_from(&state.station) {
                let boarding = classify_boarding(connection, &state.last_boarded);
                let transfers = state.transfers + u32::from(boarding.is_transfer);

                let Some(step) =
                    self.strategy
                        .step(state.weight, state.clock, connection, transfers)
                else {
                    continue;
                };

                let next = connection.destination().id();
                let admission = retained
                    .entry(next.clone())
                    .or_insert_with(|| BoundedFrontier::new(k))
                    .admit(step.weight);
                if !admission.is_admitted() {
                    trace!(station = %next, weight = ?step.weight, "state rejected");
                    continue;
                }

                let mut path = state.path.clone();
                path.push(connection.clone());
                let mut waiting_times = state.waiting_times.clone();
                waiting_times.push(step.waiting_time);

                seq += 1;
                queue.push(Queued {
                    seq,
                    state: SearchState {
                        station: next.clone(),
                        weight: step.weight,
                        clock: step.clock,
                        transfers,
                        path,
                        waiting_times,
                        last_boarded: boarding.last_boarded,
                    },
                });
            }
        }

        debug!(
            %source,
            %destination,
            routes = result.routes.len(),
            states_explored = result.states_explored,
            "search complete"
        );

        result
    }
}

/// Find up to `k` routes between two stations, best first by `criterion`.
///
/// Time and cost use the schedule-aware search; transfers uses the
/// minimum-transfer search. No route is an empty result, not an error.
pub fn find_top_routes(
    graph: &TransitGraph,
    source: &StationId,
    destination: &StationId,
    criterion: Criterion,
    start: ClockTime,
    k: usize,
) -> Vec<Route> {
    match criterion.objective() {
        Some(objective) => RouteSearch::new(graph, Weighted { objective })
            .run(source, destination, start, k)
            .routes,
        None => RouteSearch::new(graph, FewestTransfers)
            .run(source, destination, start, k)
            .routes,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
