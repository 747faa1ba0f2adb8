//! Vehicles available for a trip.

use serde::{Deserialize, Serialize};

/// A vehicle that can traverse orbits.
///
/// `max_speed` is in megamiles/hour; `crater_crossing_mins` is the time the
/// vehicle needs to cross a single crater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub max_speed: u32,
    pub crater_crossing_mins: u32,
}

impl Vehicle {
    /// Create a new vehicle.
    pub fn new(name: impl Into<String>, max_speed: u32, crater_crossing_mins: u32) -> Self {
        Self {
            name: name.into(),
            max_speed,
            crater_crossing_mins,
        }
    }

    /// Check whether this vehicle has the given name (case-insensitive).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
