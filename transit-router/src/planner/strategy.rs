//! Search strategies.
//!
//! The route search is one traversal parameterised by a strategy that decides
//! how an edge changes a state's weight, how long is spent waiting before it
//! and where the clock lands afterwards. Admission tables and the priority
//! queue both order states by the strategy's weight.

use std::fmt;

use crate::domain::ClockTime;
use crate::graph::{Connection, ConnectionKind};

use super::Criterion;
use super::frontier::Weight;
use super::waiting::waiting_time;

/// Effect of taking one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<W> {
    pub weight: W,
    /// Minutes waited before the edge.
    pub waiting_time: i64,
    /// Clock after the edge.
    pub clock: ClockTime,
}

/// How the search weighs edges.
pub trait SearchStrategy {
    type Weight: Ord + Copy + fmt::Debug;

    /// Weight of the state at the source.
    fn initial_weight(&self) -> Self::Weight;

    /// Extend a state of weight `weight` at time `clock` along `connection`.
    ///
    /// `transfers` is the transfer count after taking the edge. Returns `None`
    /// if the edge must not be explored.
    fn step(
        &self,
        weight: Self::Weight,
        clock: ClockTime,
        connection: &Connection,
        transfers: u32,
    ) -> Option<Step<Self::Weight>>;
}

/// Quantity minimised by [`Weighted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Travel plus waiting minutes.
    Time,
    /// Price.
    Cost,
}

/// Schedule-aware search for time or cost.
///
/// Travel edges with non-positive travel time are never explored.
#[derive(Debug, Clone, Copy)]
pub struct Weighted {
    pub objective: Objective,
}

impl SearchStrategy for Weighted {
    type Weight = Weight;

    fn initial_weight(&self) -> Weight {
        Weight(0.0)
    }

    fn step(
        &self,
        weight: Weight,
        clock: ClockTime,
        connection: &Connection,
        _transfers: u32,
    ) -> Option<Step<Weight>> {
        if !connection.is_transfer() && connection.travel_time() <= 0 {
            return None;
        }

        let waiting = waiting_time(connection, clock);
        let added = match self.objective {
            Objective::Time => connection.travel_time().saturating_add(waiting) as f64,
            Objective::Cost => connection.cost(),
        };

        let clock = match connection.kind() {
            ConnectionKind::Transfer => clock.plus_minutes(waiting),
            ConnectionKind::Travel(departure) => departure.arrival_time,
        };

        Some(Step {
            weight: Weight(weight.0 + added),
            waiting_time: waiting,
            clock,
        })
    }
}

/// Minimum-transfer search that ignores the timetable.
///
/// Waits are recorded as zero and the clock never moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct FewestTransfers;

impl SearchStrategy for FewestTransfers {
    type Weight = u32;

    fn initial_weight(&self) -> u32 {
        0
    }

    fn step(
        &self,
        _weight: u32,
        clock: ClockTime,
        _connection: &Connection,
        transfers: u32,
    ) -> Option<Step<u32>> {
        Some(Step {
            weight: transfers,
            waiting_time: 0,
            clock,
        })
    }
}

impl Criterion {
    /// Objective for the schedule-aware search, `None` for [`Criterion::Transfers`].
    pub fn objective(&self) -> Option<Objective> {
        match self {
            Criterion::Time => Some(Objective::Time),
            Criterion::Cost => Some(Objective::Cost),
            Criterion::Transfers => None,
        }
    }
}
