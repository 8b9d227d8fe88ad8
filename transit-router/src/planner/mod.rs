//! Top-K route planner.
//!
//! This module answers "what are the best K ways from this city to that one?"
//! for one of three criteria: total time, total cost or number of transfers.
//!
//! The engine is a best-first search that retains up to K partial routes per
//! station. Time and cost searches follow the timetable, waiting for each
//! departure; the transfers search ignores the clock. City queries fan out
//! over both stations of each city and rank the merged results.

mod aggregate;
mod config;
mod criterion;
mod frontier;
mod rank;
mod route;
mod search;
mod strategy;
mod transfer;
mod waiting;

pub use aggregate::{PlanError, Planner};
pub use config::PlannerConfig;
pub use criterion::{Criterion, InvalidCriterion};
pub use frontier::{Admission, BoundedFrontier, Weight};
pub use rank::{compare_routes, rank_routes};
pub use route::Route;
pub use search::{RouteSearch, SearchResult, find_top_routes};
pub use strategy::{FewestTransfers, Objective, SearchStrategy, Step, Weighted};
pub use transfer::{Boarding, classify_boarding};
pub use waiting::{DEFAULT_MIN_WAIT_MINS, DEFAULT_TRANSFER_WAIT_MINS, waiting_time};
