//! Per-scenario speed limits.

use std::collections::HashMap;

use super::{Orbit, OrbitId};

/// Speed limits supplied for one scenario, keyed by orbit identifier.
///
/// The overlay takes precedence over an orbit's own limit. Orbits are never
/// modified, so one catalog can serve any number of scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeedLimits {
    limits: HashMap<OrbitId, u32>,
}

impl SpeedLimits {
    /// Create an empty overlay (orbits keep their own limits).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for every orbit with this identifier.
    ///
    /// Returns the previous value, if any. A zero limit removes the entry.
    pub fn set(&mut self, id: OrbitId, speed: u32) -> Option<u32> {
        if speed == 0 {
            return self.limits.remove(&id);
        }
        self.limits.insert(id, speed)
    }

    /// Builder-style variant of [`SpeedLimits::set`].
    pub fn with(mut self, id: OrbitId, speed: u32) -> Self {
        self.set(id, speed);
        self
    }

    /// The overlay value for an identifier.
    pub fn get(&self, id: &OrbitId) -> Option<u32> {
        self.limits.get(id).copied()
    }

    /// Effective limit for an orbit: overlay first, then the orbit's own.
    pub fn limit_for(&self, orbit: &Orbit) -> Option<u32> {
        self.get(&orbit.id).or(orbit.speed_limit)
    }

    /// Number of overridden identifiers.
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Returns true if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

}

impl FromIterator<(OrbitId, u32)> for SpeedLimits {
    fn from_iter<T: IntoIterator<Item = (OrbitId, u32)>>(iter: T) -> Self {
        let mut limits = Self::new();
        for (id, speed) in iter {
            limits.set(id, speed);
        }
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Suburb;

    fn id(s: &str) -> OrbitId {
        OrbitId::parse(s).unwrap()
    }

    fn orbit(orbit_id: &str) -> Orbit {
        Orbit::new(
            id(orbit_id),
            Suburb::parse("Silk Drob").unwrap(),
            Suburb::parse("Hallitharam").unwrap(),
            18,
            20,
        )
        .unwrap()
    }

    #[test]
    fn empty_overlay_uses_orbit_limit() {
        let limits = SpeedLimits::new();
        assert!(limits.is_empty());
        assert_eq!(limits.limit_for(&orbit("Orbit1")), None);
        assert_eq!(
            limits.limit_for(&orbit("Orbit1").with_speed_limit(14)),
            Some(14)
        );
    }

    #[test]
    fn overlay_takes_precedence() {
        let limits = SpeedLimits::new().with(id("Orbit1"), 20);
        assert_eq!(limits.len(), 1);
        assert_eq!(
            limits.limit_for(&orbit("Orbit1").with_speed_limit(14)),
            Some(20)
        );
        assert_eq!(limits.limit_for(&orbit("Orbit2")), None);
    }

    #[test]
    fn set_replaces_and_zero_removes() {
        let mut limits = SpeedLimits::new();
        assert_eq!(limits.set(id("Orbit1"), 12), None);
        assert_eq!(limits.set(id("Orbit1"), 15), Some(12));
        assert_eq!(limits.get(&id("Orbit1")), Some(15));

        assert_eq!(limits.set(id("Orbit1"), 0), Some(15));
        assert!(limits.is_empty());
    }

    #[test]
    fn collect_from_pairs() {
        let limits: SpeedLimits = [(id("Orbit1"), 12), (id("Orbit2"), 10)]
            .into_iter()
            .collect();
        assert_eq!(limits.len(), 2);
        assert_eq!(limits.get(&id("Orbit1")), Some(12));
        assert_eq!(limits.get(&id("Orbit2")), Some(10));
    }
}
