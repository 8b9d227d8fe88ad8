//! Multi-modal route planner.
//!
//! Finds the best K bus and train routes between cities, ranked by total
//! time, total cost or number of transfers, and serves them over HTTP.

pub mod cache;
pub mod dataset;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod web;
