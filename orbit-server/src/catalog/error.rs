//! Catalog error types.

use crate::domain::WeatherType;

/// Errors that can occur when building or loading a network catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An orbit entry is not valid
    #[error("invalid orbit {id}: {reason}")]
    InvalidOrbit { id: String, reason: String },

    /// Two vehicles share a name
    #[error("duplicate vehicle: {0}")]
    DuplicateVehicle(String),

    /// Two profiles describe the same weather
    #[error("duplicate weather profile: {0}")]
    DuplicateWeather(WeatherType),

    /// A weather profile names a vehicle the catalog doesn't have
    #[error("weather {weather} refers to unknown vehicle {vehicle}")]
    UnknownVehicle {
        weather: WeatherType,
        vehicle: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::InvalidOrbit {
            id: "Orbit1".into(),
            reason: "distance must be positive".into(),
        };
        assert_eq!(err.to_string(), "invalid orbit Orbit1: distance must be positive");

        let err = CatalogError::DuplicateVehicle("Bike".into());
        assert_eq!(err.to_string(), "duplicate vehicle: Bike");

        let err = CatalogError::DuplicateWeather(WeatherType::Rainy);
        assert_eq!(err.to_string(), "duplicate weather profile: Rainy");

        let err = CatalogError::UnknownVehicle {
            weather: WeatherType::Sunny,
            vehicle: "Rover".into(),
        };
        assert_eq!(err.to_string(), "weather Sunny refers to unknown vehicle Rover");
    }
}
