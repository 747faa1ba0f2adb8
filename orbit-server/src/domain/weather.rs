//! Weather types and their effect on the network.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Vehicle;

/// Error returned when parsing an unknown weather type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weather type: {0}")]
pub struct InvalidWeatherType(pub String);

/// The fixed set of weather conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WeatherType {
    Sunny,
    Rainy,
    Windy,
}

impl WeatherType {
    /// All weather types, in display order.
    pub const ALL: [WeatherType; 3] = [WeatherType::Sunny, WeatherType::Rainy, WeatherType::Windy];

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherType::Sunny => "Sunny",
            WeatherType::Rainy => "Rainy",
            WeatherType::Windy => "Windy",
        }
    }
}

impl FromStr for WeatherType {
    type Err = InvalidWeatherType;

    /// Parse a weather type, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidWeatherType(trimmed.to_string()))
    }
}

impl TryFrom<String> for WeatherType {
    type Error = InvalidWeatherType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeatherType> for String {
    fn from(weather: WeatherType) -> Self {
        weather.as_str().to_string()
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a weather condition changes travel on every orbit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherProfile {
    pub weather: WeatherType,

    /// Percentage change applied to crater counts.
    /// Negative reduces, positive increases.
    pub crater_adjustment_percent: i32,

    /// Vehicles usable in this weather.
    /// The order doubles as the tie-break priority.
    pub eligible_vehicles: Vec<String>,
}

impl WeatherProfile {
    /// Create a new weather profile.
    pub fn new<I, S>(weather: WeatherType, crater_adjustment_percent: i32, vehicles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            weather,
            crater_adjustment_percent,
            eligible_vehicles: vehicles.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a vehicle may be used in this weather.
    pub fn allows(&self, vehicle: &Vehicle) -> bool {
        self.priority_of(vehicle).is_some()
    }

    /// Position of the vehicle in the eligible list, if present.
    pub fn priority_of(&self, vehicle: &Vehicle) -> Option<usize> {
        self.eligible_vehicles
            .iter()
            .position(|name| vehicle.is_named(name))
    }
}
