//! The built-in Lengaburu network.

use crate::domain::WeatherType;

use super::{CatalogBuilder, CatalogError, StaticCatalog};

/// Vehicles and weather shared by both Lengaburu networks.
///
/// Vehicle order is the tie-break order: bike, tuktuk, car.
fn lengaburu_base() -> CatalogBuilder {
    CatalogBuilder::new()
            .vehicle("Bike", 10, 2)
            .vehicle("Tuktuk", 12, 1)
            .vehicle("Car", 20, 3)
            .weather(WeatherType::Sunny, -10, &["Bike", "Tuktuk", "Car"])
            .weather(WeatherType::Rainy, 20, &["Tuktuk", "Car"])
            .weather_all_vehicles(WeatherType::Windy, 0)
}

impl StaticCatalog {
    /// The Lengaburu network without speed limits.
    ///
    /// Every query against this catalog needs caller-supplied speed limits
    /// for the orbits it may use.
    pub fn lengaburu() -> Result<Self, CatalogError> {
        lengaburu_base()
            .orbit("Orbit1", "Silk Drob", "Hallitharam", 18, 20)
            .orbit("Orbit2", "Silk Drob", "Hallitharam", 20, 10)
            .orbit("Orbit3", "Silk Drob", "RK Puram", 30, 15)
            // Orbit4 is two-way: one identifier, two directed orbits
            .orbit("Orbit4", "RK Puram", "Hallitharam", 15, 18)
            .orbit("Orbit4", "Hallitharam", "RK Puram", 15, 18)
            .orbit("Orbit5", "Hallitharam", "Bark", 6, 4)
            .orbit("Orbit6", "RK Puram", "Bark", 15, 8)
            .orbit("Orbit7", "Silk Drob", "Bark", 15, 6)
            .orbit("Orbit8", "Bark", "Hallitharam", 5, 1)
            .orbit("Orbit9", "Bark", "RK Puram", 16, 7)
            .build()
    }

    /// The Lengaburu network with posted speed limits on every orbit.
    pub fn lengaburu_preset() -> Result<Self, CatalogError> {
        lengaburu_base()
            .orbit_with_limit("Orbit1", "Hallitharam", "Silk Drob", 18, 20, 20)
            .orbit_with_limit("Orbit2", "Hallitharam", "Silk Drob", 20, 10, 12)
            .orbit_with_limit("Orbit3", "Silk Drob", "Hallitharam", 18, 22, 18)
            .orbit_with_limit("Orbit4", "Silk Drob", "Hallitharam", 20, 12, 10)
            .orbit_with_limit("Orbit5", "RK Puram", "Silk Drob", 30, 15, 15)
            .orbit_with_limit("Orbit6", "RK Puram", "Silk Drob", 30, 4, 25)
            .orbit_with_limit("Orbit7", "RK Puram", "Silk Drob", 30, 10, 18)
            .orbit_with_limit("Orbit8", "RK Puram", "Silk Drob", 30, 2, 28)
            .orbit_with_limit("Orbit9", "Hallitharam", "RK Puram", 15, 18, 12)
            .orbit_with_limit("Orbit10", "Hallitharam", "Bark", 6, 4, 10)
            .orbit_with_limit("Orbit11", "Hallitharam", "Bark", 5, 2, 14)
            .orbit_with_limit("Orbit12", "RK Puram", "Bark", 15, 8, 18)
            .orbit_with_limit("Orbit13", "Silk Drob", "Bark", 15, 6, 22)
            .orbit_with_limit("Orbit14", "Bark", "Hallitharam", 5, 1, 17)
            .orbit_with_limit("Orbit15", "Bark", "RK Puram", 16, 7, 20)
            .orbit_with_limit("Orbit16", "Bark", "Silk Drob", 16, 8, 18)
            .build()
    }
}
