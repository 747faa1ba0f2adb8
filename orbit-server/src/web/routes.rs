//! HTTP route handlers.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, warn};

use crate::catalog::NetworkCatalog;
use crate::format;
use crate::planner::{InputValidator, PlanError, PlanRequest, Planner, ValidationError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(list_weather))
        .route("/suburbs", get(list_suburbs))
        .route("/orbits", get(list_orbits))
        .route("/fastest", post(fastest))
        .route("/fastest/multi-stop", post(fastest_multi_stop))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Weather conditions and the vehicles each allows.
async fn list_weather(State(state): State<AppState>) -> Json<WeatherResponse> {
    let weather = state
        .catalog
        .weather_profiles()
        .iter()
        .map(WeatherResult::from_profile)
        .collect();

    Json(WeatherResponse { weather })
}

/// Every suburb in the network.
async fn list_suburbs(State(state): State<AppState>) -> Json<SuburbsResponse> {
    let suburbs = state
        .catalog
        .suburbs()
        .into_iter()
        .map(ToString::to_string)
        .collect();

    Json(SuburbsResponse { suburbs })
}

/// Orbits a trip could use, so a caller knows which speed limits to supply.
async fn list_orbits(
    State(state): State<AppState>,
    Query(query): Query<OrbitsQuery>,
) -> Result<Json<OrbitsResponse>, AppError> {
    let validator = InputValidator::new(state.catalog.as_ref());

    let source = validator.source(&query.source)?;
    let destinations = query
        .destinations
        .split(',')
        .filter(|d| !d.trim().is_empty())
        .map(|d| validator.destination(d))
        .collect::<Result<Vec<_>, _>>()?;

    let planner = Planner::new(state.catalog.as_ref(), state.config.as_ref());
    let ids = planner.orbits_requiring_limits(&source, &destinations)?;

    Ok(Json(OrbitsResponse {
        orbits: ids.iter().map(ToString::to_string).collect(),
    }))
}

/// Fastest route and vehicle to one destination.
async fn fastest(
    State(state): State<AppState>,
    Json(req): Json<FastestRequest>,
) -> Result<Json<FastestResponse>, AppError> {
    let validator = InputValidator::new(state.catalog.as_ref());
    let request = validator.validate_single(&req.weather, &req.source, &req.destination)?;

    plan_trip(&state, request, &req.speed_limits)
}

/// Fastest route and vehicle visiting destinations in turn.
async fn fastest_multi_stop(
    State(state): State<AppState>,
    Json(req): Json<MultiStopRequest>,
) -> Result<Json<FastestResponse>, AppError> {
    let validator = InputValidator::new(state.catalog.as_ref());
    let destinations: Vec<&str> = req.destinations.iter().map(String::as_str).collect();
    let request = validator.validate_trip(&req.weather, &req.source, &destinations)?;

    plan_trip(&state, request, &req.speed_limits)
}

/// Apply the caller's speed limits, run the planner and render the winner.
fn plan_trip(
    state: &AppState,
    request: PlanRequest,
    speed_limits: &BTreeMap<String, i64>,
) -> Result<Json<FastestResponse>, AppError> {
    let validator = InputValidator::new(state.catalog.as_ref());
    let limits =
        validator.validate_speed_limits(speed_limits.iter().map(|(id, speed)| (id, *speed)))?;
    let request = request.with_speed_limits(limits);

    let planner = Planner::new(state.catalog.as_ref(), state.config.as_ref());
    let best = planner.plan(&request)?;

    let message = format::render(&best).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Json(FastestResponse::from_candidate(&best, message)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.user_message();
        match e {
            PlanError::Validation(_) => AppError::BadRequest { message },
            PlanError::NoRouteFound { .. } => AppError::NotFound { message },
            PlanError::Computation(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
