//! Web layer for the route planner.
//!
//! Provides JSON endpoints for listing cities and planning routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, MAX_LIMIT, create_router};
pub use state::AppState;
