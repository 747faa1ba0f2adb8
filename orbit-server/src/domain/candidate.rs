//! Evaluated (route, vehicle) pairs.

use super::{RouteSequence, Vehicle};

/// A route and vehicle together with the computed traverse time.
///
/// Candidates are produced fresh for every query and discarded once the
/// fastest one has been selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub route: RouteSequence,
    pub vehicle: Vehicle,

    /// Total traverse time in minutes.
    pub traverse_mins: u64,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(route: RouteSequence, vehicle: Vehicle, traverse_mins: u64) -> Self {
        Self {
            route,
            vehicle,
            traverse_mins,
        }
    }
}
