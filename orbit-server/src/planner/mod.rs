//! Route-and-vehicle planner.
//!
//! This module answers: "Given today's weather, which orbits and which
//! vehicle get me from here to my destinations fastest?"
//!
//! A query runs in three steps: every route sequence visiting the
//! destinations is enumerated, each is costed with every vehicle the weather
//! allows, and the cheapest candidate is selected. Input from callers is
//! checked by [`InputValidator`] before any of this runs.

mod config;
mod cost;
mod enumerate;
mod search;
mod select;
mod validate;

pub use config::{InvalidOption, PlannerConfig, TieBreak, VisitOrder};
pub use cost::{CostBreakdown, CostError, CostModel, adjusted_craters};
pub use enumerate::{RouteEnumerator, orbit_ids};
pub use search::{PlanError, PlanRequest, Planner};
pub use select::select_best;
pub use validate::{InputValidator, ValidationError};
