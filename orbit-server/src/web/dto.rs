//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Candidate, Orbit, WeatherProfile};

/// Request for the fastest single-destination trip.
#[derive(Debug, Deserialize)]
pub struct FastestRequest {
    /// Weather name (e.g., "Sunny")
    pub weather: String,

    /// Starting suburb
    pub source: String,

    /// Suburb to reach
    pub destination: String,

    /// Speed limits by orbit identifier, overriding the catalog's
    #[serde(default)]
    pub speed_limits: BTreeMap<String, i64>,
}

/// Request for the fastest trip visiting two destinations in turn.
#[derive(Debug, Deserialize)]
pub struct MultiStopRequest {
    /// Weather name (e.g., "Sunny")
    pub weather: String,

    /// Starting suburb
    pub source: String,

    /// Suburbs to visit, in order
    pub destinations: Vec<String>,

    /// Speed limits by orbit identifier, overriding the catalog's
    #[serde(default)]
    pub speed_limits: BTreeMap<String, i64>,
}

/// Query for the orbits a trip could use.
#[derive(Debug, Deserialize)]
pub struct OrbitsQuery {
    /// Starting suburb
    pub source: String,

    /// Comma-separated suburbs to visit, in order
    pub destinations: String,
}

/// An orbit in a result.
#[derive(Debug, Serialize)]
pub struct OrbitResult {
    /// Orbit identifier (e.g., "Orbit1")
    pub id: String,

    pub source: String,
    pub destination: String,

    /// Distance in megamiles
    pub distance: u32,

    /// Crater count before weather adjustment
    pub craters: u32,
}

/// Response for a fastest-trip query.
#[derive(Debug, Serialize)]
pub struct FastestResponse {
    /// Vehicle to take
    pub vehicle: String,

    /// Total traverse time in minutes
    pub traverse_mins: u64,

    /// Orbits in visiting order
    pub orbits: Vec<OrbitResult>,

    /// Human-readable summary
    pub message: String,
}

/// Response listing suburbs.
#[derive(Debug, Serialize)]
pub struct SuburbsResponse {
    /// Suburb names, in catalog order
    pub suburbs: Vec<String>,
}

/// Response listing orbit identifiers.
#[derive(Debug, Serialize)]
pub struct OrbitsResponse {
    /// Distinct identifiers, sorted
    pub orbits: Vec<String>,
}

/// A weather condition and what it allows.
#[derive(Debug, Serialize)]
pub struct WeatherResult {
    pub weather: String,

    /// Percentage change applied to crater counts
    pub crater_adjustment_percent: i32,

    /// Vehicles usable in this weather, in priority order
    pub vehicles: Vec<String>,
}

/// Response listing weather conditions.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub weather: Vec<WeatherResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl OrbitResult {
    /// Create from a domain Orbit.
    pub fn from_orbit(orbit: &Orbit) -> Self {
        Self {
            id: orbit.id.to_string(),
            source: orbit.source.to_string(),
            destination: orbit.destination.to_string(),
            distance: orbit.distance,
            craters: orbit.craters,
        }
    }
}

impl FastestResponse {
    /// Create from the selected candidate and its rendered summary.
    pub fn from_candidate(candidate: &Candidate, message: String) -> Self {
        Self {
            vehicle: candidate.vehicle.name.clone(),
            traverse_mins: candidate.traverse_mins,
            orbits: candidate
                .route
                .orbits()
                .iter()
                .map(OrbitResult::from_orbit)
                .collect(),
            message,
        }
    }
}

impl WeatherResult {
    /// Create from a domain WeatherProfile.
    pub fn from_profile(profile: &WeatherProfile) -> Self {
        Self {
            weather: profile.weather.to_string(),
            crater_adjustment_percent: profile.crater_adjustment_percent,
            vehicles: profile.eligible_vehicles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrbitId, RouteSequence, Suburb, Vehicle, WeatherType};

    fn orbit(id: &str, from: &str, to: &str) -> Orbit {
        Orbit::new(
            OrbitId::parse(id).unwrap(),
            Suburb::parse(from).unwrap(),
            Suburb::parse(to).unwrap(),
            15,
            18,
        )
        .unwrap()
    }

    #[test]
    fn fastest_response_from_candidate() {
        let route = RouteSequence::new(vec![
            orbit("Orbit3", "Silk Drob", "RK Puram"),
            orbit("Orbit4", "RK Puram", "Hallitharam"),
        ])
        .unwrap();
        let candidate = Candidate::new(route, Vehicle::new("Car", 20, 3), 99);

        let response = FastestResponse::from_candidate(&candidate, "summary".to_string());

        assert_eq!(response.vehicle, "Car");
        assert_eq!(response.traverse_mins, 99);
        assert_eq!(response.message, "summary");
        let ids: Vec<_> = response.orbits.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["Orbit3", "Orbit4"]);
        assert_eq!(response.orbits[1].source, "RK Puram");
        assert_eq!(response.orbits[1].destination, "Hallitharam");
    }

    #[test]
    fn weather_result_from_profile() {
        let profile = WeatherProfile::new(WeatherType::Rainy, 20, ["Tuktuk", "Car"]);
        let result = WeatherResult::from_profile(&profile);

        assert_eq!(result.weather, "Rainy");
        assert_eq!(result.crater_adjustment_percent, 20);
        assert_eq!(result.vehicles, vec!["Tuktuk", "Car"]);
    }

    #[test]
    fn speed_limits_default_to_empty() {
        let req: FastestRequest = serde_json::from_str(
            r#"{"weather": "Sunny", "source": "Silk Drob", "destination": "Bark"}"#,
        )
        .unwrap();
        assert!(req.speed_limits.is_empty());

        let req: MultiStopRequest = serde_json::from_str(
            r#"{"weather": "Windy", "source": "Silk Drob",
                "destinations": ["Hallitharam", "RK Puram"],
                "speed_limits": {"Orbit1": 20, "Orbit4": -5}}"#,
        )
        .unwrap();
        assert_eq!(req.destinations.len(), 2);
        assert_eq!(req.speed_limits.get("Orbit4"), Some(&-5));
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse {
            error: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"error": "nope"}));
    }
}
