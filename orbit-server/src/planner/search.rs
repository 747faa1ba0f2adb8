//! Fastest route-and-vehicle search.
//!
//! Enumerates every route for a trip, costs each route with every vehicle
//! the weather allows, and selects the fastest.

use tracing::{debug, error, trace};

use crate::catalog::NetworkCatalog;
use crate::domain::{Candidate, OrbitId, RouteSequence, SpeedLimits, Suburb, WeatherType};

use super::config::PlannerConfig;
use super::cost::{CostError, CostModel};
use super::enumerate::{RouteEnumerator, orbit_ids};
use super::select::select_best;
use super::validate::ValidationError;

/// Shown to callers whenever a fastest route can't be produced.
const SYSTEM_ERROR: &str = "System Error: Unable to find the shortest possible time.";

/// Error from a planning request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Input rejected before any computation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No route visits the destinations, or no vehicle may travel
    #[error("no route from {origin} visiting {}", join_stops(.destinations))]
    NoRouteFound {
        origin: Suburb,
        destinations: Vec<Suburb>,
    },

    /// A traverse time could not be computed
    #[error("computation failed: {0}")]
    Computation(#[from] CostError),
}

impl PlanError {
    /// Text to show the caller.
    ///
    /// Validation errors are shown as-is; anything else is a generic system
    /// error and the detail goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            PlanError::Validation(e) => e.to_string(),
            PlanError::NoRouteFound { .. } | PlanError::Computation(_) => {
                SYSTEM_ERROR.to_string()
            }
        }
    }
}

/// First orbit on any route with neither a supplied nor its own speed limit.
fn missing_speed_limit<'r>(
    routes: &'r [RouteSequence],
    speed_limits: &SpeedLimits,
) -> Option<&'r OrbitId> {
    routes
        .iter()
        .flat_map(|route| route.orbits())
        .find(|orbit| speed_limits.limit_for(orbit).is_none())
        .map(|orbit| &orbit.id)
}

fn join_stops(stops: &[Suburb]) -> String {
    stops
        .iter()
        .map(Suburb::as_str)
        .collect::<Vec<_>>()
        .join(" then ")
}

/// A validated trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub weather: WeatherType,
    pub source: Suburb,

    /// Destinations in visiting order.
    pub destinations: Vec<Suburb>,

    /// Speed limits overriding the orbits' own.
    pub speed_limits: SpeedLimits,
}

impl PlanRequest {
    /// Create a request with no speed-limit overrides.
    pub fn new(weather: WeatherType, source: Suburb, destinations: Vec<Suburb>) -> Self {
        Self {
            weather,
            source,
            destinations,
            speed_limits: SpeedLimits::new(),
        }
    }

    /// Set the speed-limit overrides.
    pub fn with_speed_limits(mut self, speed_limits: SpeedLimits) -> Self {
        self.speed_limits = speed_limits;
        self
    }
}

/// Finds the fastest route and vehicle for a trip.
pub struct Planner<'a, C: NetworkCatalog + ?Sized> {
    catalog: &'a C,
    config: &'a PlannerConfig,
}

impl<'a, C: NetworkCatalog + ?Sized> Planner<'a, C> {
    /// Create a new planner.
    pub fn new(catalog: &'a C, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Fastest way from `source` to `destination`, using the orbits' own
    /// speed limits.
    pub fn compute_fastest(
        &self,
        weather: WeatherType,
        source: &Suburb,
        destination: &Suburb,
    ) -> Result<Candidate, PlanError> {
        self.run(
            weather,
            source,
            std::slice::from_ref(destination),
            &SpeedLimits::new(),
        )
    }

    /// Fastest way from `source` visiting `first` then `second`, using the
    /// orbits' own speed limits.
    pub fn compute_fastest_multi_stop(
        &self,
        weather: WeatherType,
        source: &Suburb,
        first: &Suburb,
        second: &Suburb,
    ) -> Result<Candidate, PlanError> {
        self.run(
            weather,
            source,
            &[first.clone(), second.clone()],
            &SpeedLimits::new(),
        )
    }

    /// Fastest way from `source` visiting `destinations`, with caller-supplied
    /// speed limits taking precedence over the orbits' own.
    pub fn compute_fastest_with_limits(
        &self,
        weather: WeatherType,
        source: &Suburb,
        destinations: &[Suburb],
        speed_limits: &SpeedLimits,
    ) -> Result<Candidate, PlanError> {
        self.run(weather, source, destinations, speed_limits)
    }

    /// Fastest way to complete a validated trip.
    pub fn plan(&self, request: &PlanRequest) -> Result<Candidate, PlanError> {
        self.run(
            request.weather,
            &request.source,
            &request.destinations,
            &request.speed_limits,
        )
    }

    /// Identifiers of every orbit a trip could use, sorted and distinct.
    ///
    /// A caller working against a catalog without speed limits must supply
    /// one for each of these.
    pub fn orbits_requiring_limits(
        &self,
        source: &Suburb,
        destinations: &[Suburb],
    ) -> Result<Vec<OrbitId>, PlanError> {
        let routes = RouteEnumerator::new(self.catalog, self.config.visit_order)
            .enumerate(source, destinations)?;
        Ok(orbit_ids(&routes))
    }

    fn run(
        &self,
        weather: WeatherType,
        source: &Suburb,
        destinations: &[Suburb],
        speed_limits: &SpeedLimits,
    ) -> Result<Candidate, PlanError> {
        let profile = self
            .catalog
            .weather_profile(weather)
            .ok_or_else(|| ValidationError::UnknownWeather(weather.to_string()))?;

        let routes = RouteEnumerator::new(self.catalog, self.config.visit_order)
            .enumerate(source, destinations)?;
        let vehicles = self.catalog.eligible_vehicles(profile);

        debug!(
            weather = %weather,
            source = %source,
            routes = routes.len(),
            vehicles = vehicles.len(),
            "Evaluating candidates"
        );

        let no_route = || PlanError::NoRouteFound {
            origin: source.clone(),
            destinations: destinations.to_vec(),
        };
        if routes.is_empty() || vehicles.is_empty() {
            return Err(no_route());
        }

        if let Some(orbit) = missing_speed_limit(&routes, speed_limits) {
            return Err(ValidationError::MissingSpeed {
                orbit: orbit.to_string(),
            }
            .into());
        }

        let model = CostModel::new(speed_limits);
        let mut candidates = Vec::with_capacity(routes.len() * vehicles.len());

        // Vehicle-major: this order decides first-seen ties
        for vehicle in &vehicles {
            for route in &routes {
                let traverse_mins = model.cost(profile, vehicle, route).map_err(|e| {
                    error!(
                        vehicle = %vehicle.name,
                        from = %route.origin(),
                        to = %route.destination(),
                        error = %e,
                        "Traverse time computation failed"
                    );
                    PlanError::Computation(e)
                })?;

                trace!(
                    vehicle = %vehicle.name,
                    orbits = route.len(),
                    traverse_mins,
                    "Evaluated candidate"
                );

                candidates.push(Candidate::new(
                    route.clone(),
                    (*vehicle).clone(),
                    traverse_mins,
                ));
            }
        }

        let best = select_best(candidates, self.config.tie_break, profile).ok_or_else(no_route)?;

        debug!(
            vehicle = %best.vehicle.name,
            traverse_mins = best.traverse_mins,
            "Selected fastest candidate"
        );

        Ok(best)
    }
}
