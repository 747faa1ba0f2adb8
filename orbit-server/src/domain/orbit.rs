//! Orbits: directed routes between suburbs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Suburb;
use super::error::DomainError;

/// Error returned when parsing an invalid orbit identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid orbit identifier: must not be blank")]
pub struct InvalidOrbitId;

/// Identifier of an orbit, e.g. `Orbit4`.
///
/// Identifiers are not unique per orbit: a two-way route is modelled as two
/// directed orbits sharing one identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrbitId(String);

impl OrbitId {
    /// Parse an orbit identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidOrbitId> {
        let id = s.trim();
        if id.is_empty() {
            return Err(InvalidOrbitId);
        }
        Ok(Self(id.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrbitId {
    type Error = InvalidOrbitId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrbitId> for String {
    fn from(id: OrbitId) -> Self {
        id.0
    }
}

impl fmt::Debug for OrbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrbitId({})", self.0)
    }
}

impl fmt::Display for OrbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directed route from one suburb to another.
///
/// `distance` is in megamiles and `speed_limit` in megamiles/hour. An orbit
/// loaded without a speed limit relies on the caller supplying one per
/// scenario through [`SpeedLimits`](super::SpeedLimits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orbit {
    pub id: OrbitId,
    pub source: Suburb,
    pub destination: Suburb,
    pub distance: u32,
    pub craters: u32,
    pub speed_limit: Option<u32>,
}

impl Orbit {
    /// Create an orbit without a speed limit.
    ///
    /// Fails if `distance` is zero.
    pub fn new(
        id: OrbitId,
        source: Suburb,
        destination: Suburb,
        distance: u32,
        craters: u32,
    ) -> Result<Self, DomainError> {
        if distance == 0 {
            return Err(DomainError::InvalidDistance(id));
        }

        Ok(Self {
            id,
            source,
            destination,
            distance,
            craters,
            speed_limit: None,
        })
    }

    /// Returns this orbit with its own speed limit set.
    ///
    /// A zero limit is stored as unset.
    pub fn with_speed_limit(mut self, speed_limit: u32) -> Self {
        self.speed_limit = (speed_limit > 0).then_some(speed_limit);
        self
    }

    /// Check whether this orbit runs from `from` to `to`.
    pub fn connects(&self, from: &Suburb, to: &Suburb) -> bool {
        &self.source == from && &self.destination == to
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.id, self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suburb(s: &str) -> Suburb {
        Suburb::parse(s).unwrap()
    }

    fn orbit(id: &str, from: &str, to: &str) -> Orbit {
        Orbit::new(OrbitId::parse(id).unwrap(), suburb(from), suburb(to), 18, 20).unwrap()
    }

    #[test]
    fn orbit_id_parse() {
        assert_eq!(OrbitId::parse(" Orbit1 ").unwrap().as_str(), "Orbit1");
        assert_eq!(OrbitId::parse(""), Err(InvalidOrbitId));
    }

    #[test]
    fn orbit_id_ordering() {
        let mut ids = vec![
            OrbitId::parse("Orbit3").unwrap(),
            OrbitId::parse("Orbit1").unwrap(),
            OrbitId::parse("Orbit2").unwrap(),
        ];
        ids.sort();
        let names: Vec<_> = ids.iter().map(OrbitId::as_str).collect();
        assert_eq!(names, vec!["Orbit1", "Orbit2", "Orbit3"]);
    }

    #[test]
    fn new_orbit_has_no_speed_limit() {
        let o = orbit("Orbit1", "Silk Drob", "Hallitharam");
        assert_eq!(o.speed_limit, None);
        assert_eq!(o.distance, 18);
        assert_eq!(o.craters, 20);
    }

    #[test]
    fn zero_distance_rejected() {
        let id = OrbitId::parse("Orbit1").unwrap();
        let err = Orbit::new(id.clone(), suburb("A"), suburb("B"), 0, 3).unwrap_err();
        assert_eq!(err, DomainError::InvalidDistance(id));
    }

    #[test]
    fn with_speed_limit() {
        let o = orbit("Orbit1", "Silk Drob", "Hallitharam").with_speed_limit(20);
        assert_eq!(o.speed_limit, Some(20));

        let o = o.with_speed_limit(0);
        assert_eq!(o.speed_limit, None);
    }

    #[test]
    fn connects_is_directional_and_case_insensitive() {
        let o = orbit("Orbit4", "RK Puram", "Hallitharam");
        assert!(o.connects(&suburb("rk puram"), &suburb("HALLITHARAM")));
        assert!(!o.connects(&suburb("Hallitharam"), &suburb("RK Puram")));
    }

    #[test]
    fn display() {
        let o = orbit("Orbit1", "Silk Drob", "Hallitharam");
        assert_eq!(o.to_string(), "Orbit1 (Silk Drob-Hallitharam)");
    }
}
