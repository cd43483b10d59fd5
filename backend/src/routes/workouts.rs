//! Workout session routes
//!
//! Every handler runs behind the token gate and scopes its queries to the
//! caller. Sessions owned by someone else are reported as missing.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fitness_tracker_shared::{CreateWorkoutSessionRequest, WorkoutSessionResponse};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/:id", get(get_session).delete(delete_session))
}

/// POST /workouts - Log a session with its sets
async fn create_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWorkoutSessionRequest>,
) -> Result<Response, ApiError> {
    let session = WorkoutService::create_session(state.db(), auth.owner(), req).await?;
    let location = created_location("/workouts", session.id)?;

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(session)).into_response())
}

/// GET /workouts - The caller's sessions, newest first
async fn list_sessions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<WorkoutSessionResponse>>, ApiError> {
    let sessions = WorkoutService::list_sessions(state.db(), auth.owner()).await?;
    Ok(Json(sessions))
}

/// GET /workouts/:id - One of the caller's sessions
async fn get_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutSessionResponse>, ApiError> {
    let session = WorkoutService::get_session(state.db(), auth.owner(), id).await?;
    Ok(Json(session))
}

/// DELETE /workouts/:id - Delete a session and its sets
async fn delete_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    WorkoutService::delete_session(state.db(), auth.owner(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Location header value for a newly created resource
pub(super) fn created_location(base: &str, id: i64) -> Result<HeaderValue, ApiError> {
    HeaderValue::try_from(format!("{}/{}", base, id))
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("invalid location header: {}", e)))
}
