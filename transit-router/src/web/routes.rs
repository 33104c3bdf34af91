//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{debug, error};

use crate::network::answer_stat_requests;
use crate::router::RouterError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops/:name", get(stop_info))
        .route("/buses/:name", get(bus_info))
        .route("/route", get(route))
        .route("/stats", post(stats))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Buses calling at a stop.
async fn stop_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopAnswer>, AppError> {
    let buses = state
        .router
        .catalogue()
        .stop_buses_sorted(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("stop {name:?} not found"),
        })?;

    Ok(Json(StopAnswer {
        buses: buses.into_iter().map(str::to_string).collect(),
    }))
}

/// Figures for one bus.
async fn bus_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BusAnswer>, AppError> {
    let stats = state
        .router
        .bus_stats(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("bus {name:?} not found"),
        })?;

    Ok(Json(stats.into()))
}

/// Fastest journey between two stops.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteAnswer>, AppError> {
    let info = state
        .cache
        .get_route(&state.router, &req.from, &req.to)
        .await?;

    let answer = RouteAnswer::from_route(&info).ok_or_else(|| AppError::NotFound {
        message: format!("no route from {:?} to {:?}", req.from, req.to),
    })?;

    Ok(Json(answer))
}

/// Answer a batch of statistics requests.
async fn stats(
    State(state): State<AppState>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Json<Vec<StatResponse>> {
    debug!(requests = requests.len(), "Answering stat batch");
    Json(answer_stat_requests(&state.router, &requests))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<RouterError> for AppError {
    fn from(e: RouterError) -> Self {
        match e {
            RouterError::StopNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RouterError::AmbiguousRide { .. } => AppError::Conflict {
                message: e.to_string(),
            },
            RouterError::InvalidSettings(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, message = message.as_str(), "Request failed");
        } else {
            debug!(%status, message = message.as_str(), "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
