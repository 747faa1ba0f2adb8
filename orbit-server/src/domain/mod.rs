//! Domain types for the orbit planner.
//!
//! This module contains the core model of the network: suburbs, orbits,
//! vehicles and weather, plus the per-query route and candidate values.
//! Types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod candidate;
mod error;
mod orbit;
mod route;
mod speed;
mod suburb;
mod vehicle;
mod weather;

pub use candidate::Candidate;
pub use error::DomainError;
pub use orbit::{InvalidOrbitId, Orbit, OrbitId};
pub use route::RouteSequence;
pub use speed::SpeedLimits;
pub use suburb::{InvalidSuburb, Suburb};
pub use vehicle::Vehicle;
pub use weather::{InvalidWeatherType, WeatherProfile, WeatherType};
