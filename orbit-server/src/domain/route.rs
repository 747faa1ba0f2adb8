//! Route sequences: chains of orbits traversed in order.

use super::error::DomainError;
use super::{Orbit, Suburb};

/// A non-empty chain of orbits.
///
/// Each orbit's destination is the next orbit's source. This is checked at
/// construction, so a `RouteSequence` always describes a connected trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSequence {
    orbits: Vec<Orbit>,
}

impl RouteSequence {
    /// Create a route sequence from orbits in visiting order.
    pub fn new(orbits: Vec<Orbit>) -> Result<Self, DomainError> {
        if orbits.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        for pair in orbits.windows(2) {
            if let [prev, next] = pair {
                if prev.destination != next.source {
                    return Err(DomainError::BrokenChain(
                        prev.destination.clone(),
                        next.source.clone(),
                    ));
                }
            }
        }

        Ok(Self { orbits })
    }

    /// A route made of a single orbit.
    pub fn single(orbit: Orbit) -> Self {
        Self {
            orbits: vec![orbit],
        }
    }

    /// A two-orbit route through the suburb where `first` ends.
    ///
    /// The caller guarantees `second` starts there.
    pub(crate) fn two_hop(first: Orbit, second: Orbit) -> Self {
        debug_assert_eq!(first.destination, second.source);
        Self {
            orbits: vec![first, second],
        }
    }

    /// The orbits in visiting order.
    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    /// Number of orbits (hops).
    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    /// Always false for a constructed route.
    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }

    /// Where the route starts.
    pub fn origin(&self) -> &Suburb {
        // Non-empty by construction
        &self.orbits[0].source
    }

    /// Where the route ends.
    pub fn destination(&self) -> &Suburb {
        &self.orbits[self.orbits.len() - 1].destination
    }

    /// Total distance in megamiles.
    pub fn total_distance(&self) -> u64 {
        self.orbits.iter().map(|o| u64::from(o.distance)).sum()
    }

    /// Total baseline crater count, before weather adjustment.
    pub fn total_craters(&self) -> u64 {
        self.orbits.iter().map(|o| u64::from(o.craters)).sum()
    }
}
