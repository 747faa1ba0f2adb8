//! Web layer for the orbit planner.
//!
//! Provides HTTP endpoints for listing network data and finding the fastest
//! route and vehicle for a trip.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
