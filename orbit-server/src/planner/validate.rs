//! Input validation.
//!
//! Turns raw caller input (strings, untyped numbers) into typed planner
//! requests, checking every name against the catalog before any computation
//! starts.

use crate::catalog::NetworkCatalog;
use crate::domain::{OrbitId, SpeedLimits, Suburb, WeatherType};

use super::search::PlanRequest;

/// Why caller input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid weather type. Input doesn't exist.")]
    UnknownWeather(String),

    #[error("Please enter a valid source. Input doesn't exist.")]
    UnknownSource(String),

    #[error("Please enter a valid destination. Input doesn't exist.")]
    UnknownDestination(String),

    /// No direct orbit for a single-hop trip
    #[error("No route/orbit found for this source-destination combination.")]
    NoOrbit { origin: String, destination: String },

    #[error("Please enter a valid speed for {orbit}: must be a positive whole number.")]
    InvalidSpeed { orbit: String, input: String },

    #[error("Please enter a valid orbit. {0} doesn't exist.")]
    UnknownOrbit(String),

    /// An orbit the trip may use has neither a supplied nor its own limit
    #[error("Please enter a speed limit for {orbit}.")]
    MissingSpeed { orbit: String },

    #[error("Please enter one or two destinations, got {0}.")]
    StopCount(usize),
}

/// Validates caller input against a catalog.
pub struct InputValidator<'a, C: NetworkCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: NetworkCatalog + ?Sized> InputValidator<'a, C> {
    /// Create a validator for a catalog.
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Parse a weather type the catalog has a profile for.
    pub fn weather(&self, input: &str) -> Result<WeatherType, ValidationError> {
        input
            .parse::<WeatherType>()
            .ok()
            .filter(|w| self.catalog.weather_profile(*w).is_some())
            .ok_or_else(|| ValidationError::UnknownWeather(input.trim().to_string()))
    }

    /// Parse a suburb some orbit starts at.
    pub fn source(&self, input: &str) -> Result<Suburb, ValidationError> {
        Suburb::parse(input)
            .ok()
            .filter(|s| self.catalog.has_source(s))
            .ok_or_else(|| ValidationError::UnknownSource(input.trim().to_string()))
    }

    /// Parse a suburb some orbit ends at.
    pub fn destination(&self, input: &str) -> Result<Suburb, ValidationError> {
        Suburb::parse(input)
            .ok()
            .filter(|s| self.catalog.has_destination(s))
            .ok_or_else(|| ValidationError::UnknownDestination(input.trim().to_string()))
    }

    /// Validate a single-destination trip.
    ///
    /// Besides the names, a direct orbit from source to destination must
    /// exist.
    pub fn validate_single(
        &self,
        weather: &str,
        source: &str,
        destination: &str,
    ) -> Result<PlanRequest, ValidationError> {
        let weather = self.weather(weather)?;
        let source = self.source(source)?;
        let destination = self.destination(destination)?;

        if self.catalog.orbits_between(&source, &destination).is_empty() {
            return Err(ValidationError::NoOrbit {
                origin: source.to_string(),
                destination: destination.to_string(),
            });
        }

        Ok(PlanRequest::new(weather, source, vec![destination]))
    }

    /// Validate a two-destination trip.
    ///
    /// Route existence is left to the planner: a missing hop yields no
    /// candidates rather than a validation error.
    pub fn validate_multi_stop(
        &self,
        weather: &str,
        source: &str,
        first: &str,
        second: &str,
    ) -> Result<PlanRequest, ValidationError> {
        let weather = self.weather(weather)?;
        let source = self.source(source)?;
        let first = self.destination(first)?;
        let second = self.destination(second)?;

        Ok(PlanRequest::new(weather, source, vec![first, second]))
    }

    /// Validate a trip with one or two destinations.
    pub fn validate_trip(
        &self,
        weather: &str,
        source: &str,
        destinations: &[&str],
    ) -> Result<PlanRequest, ValidationError> {
        match destinations {
            [destination] => self.validate_single(weather, source, destination),
            [first, second] => self.validate_multi_stop(weather, source, first, second),
            _ => Err(ValidationError::StopCount(destinations.len())),
        }
    }

    /// Parse a typed speed for an orbit.
    pub fn parse_speed(&self, orbit: &OrbitId, input: &str) -> Result<u32, ValidationError> {
        match input.trim().parse::<u32>() {
            Ok(speed) if speed > 0 => Ok(speed),
            _ => Err(ValidationError::InvalidSpeed {
                orbit: orbit.to_string(),
                input: input.to_string(),
            }),
        }
    }

    /// Check one speed limit: the orbit must exist and the speed be positive.
    pub fn speed_limit(&self, orbit: &str, speed: i64) -> Result<(OrbitId, u32), ValidationError> {
        let id = OrbitId::parse(orbit)
            .ok()
            .filter(|id| self.catalog.has_orbit_id(id))
            .ok_or_else(|| ValidationError::UnknownOrbit(orbit.trim().to_string()))?;

        let speed = self.parse_speed(&id, &speed.to_string())?;
        Ok((id, speed))
    }

    /// Check a set of speed limits, stopping at the first bad entry.
    pub fn validate_speed_limits<I, K>(&self, limits: I) -> Result<SpeedLimits, ValidationError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        limits
            .into_iter()
            .map(|(orbit, speed)| self.speed_limit(orbit.as_ref(), speed))
            .collect()
    }
}
