//! Network catalog: the static orbits, vehicles and weather profiles.
//!
//! The planner reads network data through the [`NetworkCatalog`] trait so it
//! can be driven by the built-in Lengaburu network, a catalog loaded from a
//! JSON file, or test fixtures.

mod builder;
mod error;
mod lengaburu;

use std::path::Path;

use crate::domain::{Orbit, OrbitId, Suburb, Vehicle, WeatherProfile, WeatherType};

pub use builder::{CatalogBuilder, CatalogFile, OrbitEntry};
pub use error::CatalogError;

/// Read-only access to network data.
///
/// Implementations must return the same data for the whole of a scenario
/// run. Slices are returned in catalog order, which the planner preserves
/// when enumerating candidates.
pub trait NetworkCatalog {
    /// All directed orbits.
    fn orbits(&self) -> &[Orbit];

    /// All vehicles.
    fn vehicles(&self) -> &[Vehicle];

    /// All weather profiles.
    fn weather_profiles(&self) -> &[WeatherProfile];

    /// Look up the profile for a weather type.
    fn weather_profile(&self, weather: WeatherType) -> Option<&WeatherProfile> {
        self.weather_profiles().iter().find(|p| p.weather == weather)
    }

    /// Vehicles usable in the given weather, in catalog order.
    fn eligible_vehicles(&self, profile: &WeatherProfile) -> Vec<&Vehicle> {
        self.vehicles()
            .iter()
            .filter(|v| profile.allows(v))
            .collect()
    }

    /// Orbits running directly from `from` to `to`, in catalog order.
    fn orbits_between(&self, from: &Suburb, to: &Suburb) -> Vec<&Orbit> {
        self.orbits().iter().filter(|o| o.connects(from, to)).collect()
    }

    /// Check whether any orbit starts at this suburb.
    fn has_source(&self, suburb: &Suburb) -> bool {
        self.orbits().iter().any(|o| &o.source == suburb)
    }

    /// Check whether any orbit ends at this suburb.
    fn has_destination(&self, suburb: &Suburb) -> bool {
        self.orbits().iter().any(|o| &o.destination == suburb)
    }

    /// Check whether any orbit carries this identifier.
    fn has_orbit_id(&self, id: &OrbitId) -> bool {
        self.orbits().iter().any(|o| &o.id == id)
    }
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    orbits: Vec<Orbit>,
    vehicles: Vec<Vehicle>,
    weather_profiles: Vec<WeatherProfile>,
}

impl StaticCatalog {
    /// Create a catalog from already-validated parts.
    ///
    /// Prefer [`CatalogBuilder`], which checks cross-references.
    pub fn new(
        orbits: Vec<Orbit>,
        vehicles: Vec<Vehicle>,
        weather_profiles: Vec<WeatherProfile>,
    ) -> Self {
        Self {
            orbits,
            vehicles,
            weather_profiles,
        }
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        CatalogBuilder::from(file).build()
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// All suburbs mentioned by any orbit, in first-seen order.
    pub fn suburbs(&self) -> Vec<&Suburb> {
        let mut suburbs: Vec<&Suburb> = Vec::new();
        for orbit in &self.orbits {
            for suburb in [&orbit.source, &orbit.destination] {
                if !suburbs.contains(&suburb) {
                    suburbs.push(suburb);
                }
            }
        }
        suburbs
    }
}

impl NetworkCatalog for StaticCatalog {
    fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn weather_profiles(&self) -> &[WeatherProfile] {
        &self.weather_profiles
    }
}
