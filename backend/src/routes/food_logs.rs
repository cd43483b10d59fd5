//! Food log routes

use super::workouts::created_location;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::FoodLogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use fitness_tracker_shared::{CreateFoodLogRequest, FoodLogResponse};

/// Create food log routes
pub fn food_log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_food_logs).post(create_food_log))
        .route("/:id", delete(delete_food_log))
}

/// POST /foodlogs - Log a food entry
async fn create_food_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFoodLogRequest>,
) -> Result<Response, ApiError> {
    let food_log = FoodLogService::create(state.db(), auth.owner(), req).await?;
    let location = created_location("/foodlogs", food_log.id)?;

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(food_log)).into_response())
}

/// GET /foodlogs - The caller's food logs, newest first
async fn list_food_logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<FoodLogResponse>>, ApiError> {
    let logs = FoodLogService::list(state.db(), auth.owner()).await?;
    Ok(Json(logs))
}

/// DELETE /foodlogs/:id
async fn delete_food_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    FoodLogService::delete(state.db(), auth.owner(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
