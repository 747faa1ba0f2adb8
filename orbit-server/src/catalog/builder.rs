//! Catalog construction and validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Orbit, OrbitId, Suburb, Vehicle, WeatherProfile, WeatherType};

use super::StaticCatalog;
use super::error::CatalogError;

/// An orbit as written in a catalog file, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitEntry {
    pub id: String,
    pub source: String,
    pub destination: String,
    pub distance: u32,
    pub craters: u32,
    #[serde(default)]
    pub speed_limit: Option<u32>,
}

impl OrbitEntry {
    fn into_orbit(self) -> Result<Orbit, CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidOrbit {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        let id = OrbitId::parse(&self.id).map_err(|e| invalid(&e.to_string()))?;
        let source = Suburb::parse(&self.source).map_err(|e| invalid(&e.to_string()))?;
        let destination =
            Suburb::parse(&self.destination).map_err(|e| invalid(&e.to_string()))?;

        if self.speed_limit == Some(0) {
            return Err(invalid("speed limit must be positive"));
        }

        let orbit = Orbit::new(id, source, destination, self.distance, self.craters)
            .map_err(|e| invalid(&e.to_string()))?;

        Ok(match self.speed_limit {
            Some(limit) => orbit.with_speed_limit(limit),
            None => orbit,
        })
    }
}

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub vehicles: Vec<Vehicle>,
    pub weather: Vec<WeatherProfile>,
    pub orbits: Vec<OrbitEntry>,
}

/// Builder for creating a validated catalog.
///
/// Provides a fluent API; all checks run in [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    inner: CatalogFile,
}

impl CatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle.
    pub fn vehicle(mut self, name: &str, max_speed: u32, crater_crossing_mins: u32) -> Self {
        self.inner
            .vehicles
            .push(Vehicle::new(name, max_speed, crater_crossing_mins));
        self
    }

    /// Add a weather profile.
    pub fn weather(
        mut self,
        weather: WeatherType,
        crater_adjustment_percent: i32,
        vehicles: &[&str],
    ) -> Self {
        self.inner.weather.push(WeatherProfile::new(
            weather,
            crater_adjustment_percent,
            vehicles.iter().copied(),
        ));
        self
    }

    /// Add a weather profile in which every vehicle added so far may be used.
    pub fn weather_all_vehicles(
        mut self,
        weather: WeatherType,
        crater_adjustment_percent: i32,
    ) -> Self {
        let names: Vec<String> = self.inner.vehicles.iter().map(|v| v.name.clone()).collect();
        self.inner
            .weather
            .push(WeatherProfile::new(weather, crater_adjustment_percent, names));
        self
    }

    /// Add an orbit without its own speed limit.
    pub fn orbit(self, id: &str, from: &str, to: &str, distance: u32, craters: u32) -> Self {
        self.push_orbit(id, from, to, distance, craters, None)
    }

    /// Add an orbit with its own speed limit.
    pub fn orbit_with_limit(
        self,
        id: &str,
        from: &str,
        to: &str,
        distance: u32,
        craters: u32,
        speed_limit: u32,
    ) -> Self {
        self.push_orbit(id, from, to, distance, craters, Some(speed_limit))
    }

    fn push_orbit(
        mut self,
        id: &str,
        from: &str,
        to: &str,
        distance: u32,
        craters: u32,
        speed_limit: Option<u32>,
    ) -> Self {
        self.inner.orbits.push(OrbitEntry {
            id: id.to_string(),
            source: from.to_string(),
            destination: to.to_string(),
            distance,
            craters,
            speed_limit,
        });
        self
    }

    /// Validate and build the catalog.
    ///
    /// Checks that vehicle names and weather types are unique, that every
    /// weather profile names known vehicles, and that every orbit is valid.
    pub fn build(self) -> Result<StaticCatalog, CatalogError> {
        let CatalogFile {
            vehicles,
            weather,
            orbits,
        } = self.inner;

        let mut names = HashSet::new();
        for vehicle in &vehicles {
            if !names.insert(vehicle.name.to_lowercase()) {
                return Err(CatalogError::DuplicateVehicle(vehicle.name.clone()));
            }
        }

        let mut seen_weather = HashSet::new();
        for profile in &weather {
            if !seen_weather.insert(profile.weather) {
                return Err(CatalogError::DuplicateWeather(profile.weather));
            }
            if let Some(unknown) = profile
                .eligible_vehicles
                .iter()
                .find(|name| !vehicles.iter().any(|v| v.is_named(name)))
            {
                return Err(CatalogError::UnknownVehicle {
                    weather: profile.weather,
                    vehicle: unknown.clone(),
                });
            }
        }

        let orbits = orbits
            .into_iter()
            .map(OrbitEntry::into_orbit)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StaticCatalog::new(orbits, vehicles, weather))
    }
}

impl From<CatalogFile> for CatalogBuilder {
    fn from(inner: CatalogFile) -> Self {
        Self { inner }
    }
}
