//! Traverse-time cost model.
//!
//! The time to complete a route with one vehicle is the driving time at the
//! applicable speed plus the time spent crossing the weather-adjusted craters:
//!
//! ```text
//! applicable speed = min(lowest speed limit on the route, vehicle max speed)
//! adjusted craters = round(craters × (100 + weather adjustment) / 100), ≥ 0
//! traverse minutes = distance × 60 / applicable speed
//!                  + adjusted craters × vehicle crossing minutes
//! ```
//!
//! Driving time uses integer division, truncating toward zero.

use crate::domain::{RouteSequence, SpeedLimits, Vehicle, WeatherProfile};

const MINUTES_PER_HOUR: u64 = 60;

/// Why a traverse time could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    /// No usable speed: an orbit has no speed limit or the vehicle can't move
    #[error("vehicle {vehicle} has no usable speed on route starting {route}")]
    NonPositiveSpeed { vehicle: String, route: String },

    /// An intermediate value does not fit in 64 bits
    #[error("traverse time overflowed for vehicle {vehicle}")]
    Overflow { vehicle: String },
}

/// Every intermediate value of a traverse-time computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    pub total_distance: u64,
    pub baseline_craters: u64,
    pub adjusted_craters: u64,
    pub orbit_speed_limit: u64,
    pub applicable_speed: u64,
    pub travel_mins: u64,
    pub crater_mins: u64,
}

impl CostBreakdown {
    /// Total traverse time in minutes.
    pub fn total(&self) -> u64 {
        // Both parts were bounds-checked when the breakdown was built
        self.travel_mins.saturating_add(self.crater_mins)
    }
}

/// Apply a weather percentage to a crater count.
///
/// Rounds half up and never goes below zero.
///
/// # Examples
///
/// ```
/// use orbit_server::planner::adjusted_craters;
///
/// assert_eq!(adjusted_craters(20, -10), Some(18));
/// assert_eq!(adjusted_craters(15, 10), Some(17)); // 16.5 rounds up
/// assert_eq!(adjusted_craters(20, -100), Some(0));
/// assert_eq!(adjusted_craters(20, -150), Some(0));
/// ```
pub fn adjusted_craters(baseline: u64, adjustment_percent: i32) -> Option<u64> {
    let scaled = i128::from(baseline) * (100 + i128::from(adjustment_percent));
    if scaled <= 0 {
        return Some(0);
    }
    u64::try_from((scaled + 50) / 100).ok()
}

/// Computes traverse times, consulting a speed-limit overlay.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    speed_limits: &'a SpeedLimits,
}

impl<'a> CostModel<'a> {
    /// Create a cost model using the given overlay.
    ///
    /// Orbits not in the overlay use their own speed limit.
    pub fn new(speed_limits: &'a SpeedLimits) -> Self {
        Self { speed_limits }
    }

    /// Traverse time in minutes for `vehicle` on `route` in `weather`.
    pub fn cost(
        &self,
        weather: &WeatherProfile,
        vehicle: &Vehicle,
        route: &RouteSequence,
    ) -> Result<u64, CostError> {
        self.breakdown(weather, vehicle, route).map(|b| b.total())
    }

    /// Like [`CostModel::cost`], returning every intermediate value.
    pub fn breakdown(
        &self,
        weather: &WeatherProfile,
        vehicle: &Vehicle,
        route: &RouteSequence,
    ) -> Result<CostBreakdown, CostError> {
        let overflow = || CostError::Overflow {
            vehicle: vehicle.name.clone(),
        };

        let total_distance = route.total_distance();
        let baseline_craters = route.total_craters();

        // The slowest orbit governs the whole trip; unset limits count as zero
        let orbit_speed_limit = route
            .orbits()
            .iter()
            .map(|o| u64::from(self.speed_limits.limit_for(o).unwrap_or(0)))
            .min()
            .unwrap_or(0);

        let applicable_speed = orbit_speed_limit.min(u64::from(vehicle.max_speed));
        if applicable_speed == 0 {
            return Err(CostError::NonPositiveSpeed {
                vehicle: vehicle.name.clone(),
                route: route.origin().to_string(),
            });
        }

        let adjusted_craters =
            adjusted_craters(baseline_craters, weather.crater_adjustment_percent)
                .ok_or_else(overflow)?;

        let travel_mins = total_distance
            .checked_mul(MINUTES_PER_HOUR)
            .ok_or_else(overflow)?
            / applicable_speed;

        let crater_mins = adjusted_craters
            .checked_mul(u64::from(vehicle.crater_crossing_mins))
            .ok_or_else(overflow)?;

        travel_mins.checked_add(crater_mins).ok_or_else(overflow)?;

        Ok(CostBreakdown {
            total_distance,
            baseline_craters,
            adjusted_craters,
            orbit_speed_limit,
            applicable_speed,
            travel_mins,
            crater_mins,
        })
    }
}
