//! Food log service

use crate::error::ApiError;
use crate::repositories::{CreateFoodLog, FoodLogRecord, FoodLogRepository, Owner};
use fitness_tracker_shared::validation::{validate_name, validate_non_negative};
use fitness_tracker_shared::{CreateFoodLogRequest, FoodLogResponse};
use sqlx::PgPool;
use tracing::info;

/// Message for food logs that are absent or owned by someone else
pub const FOOD_LOG_NOT_FOUND: &str =
    "Food log not found or you do not have permission to delete it.";

/// Food log service
pub struct FoodLogService;

impl FoodLogService {
    /// Log a food entry for the caller
    pub async fn create(
        pool: &PgPool,
        owner: Owner,
        request: CreateFoodLogRequest,
    ) -> Result<FoodLogResponse, ApiError> {
        let input = Self::validate_request(request)?;
        let record = FoodLogRepository::create(pool, owner, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = owner.id(), food_log_id = record.id, "food logged");
        Ok(to_response(record))
    }

    /// List the caller's food logs, newest first
    pub async fn list(pool: &PgPool, owner: Owner) -> Result<Vec<FoodLogResponse>, ApiError> {
        let records = FoodLogRepository::list(pool, owner)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Delete one of the caller's food logs
    pub async fn delete(pool: &PgPool, owner: Owner, id: i64) -> Result<(), ApiError> {
        let deleted = FoodLogRepository::delete(pool, owner, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(FOOD_LOG_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    /// Validate a create request and convert it to repository input
    pub fn validate_request(request: CreateFoodLogRequest) -> Result<CreateFoodLog, ApiError> {
        validate_name("Food name", &request.food_name).map_err(ApiError::Validation)?;
        for (field, value) in [
            ("Calories", request.calories),
            ("Protein", request.protein),
            ("Carbs", request.carbs),
            ("Fat", request.fat),
        ] {
            validate_non_negative(field, value).map_err(ApiError::Validation)?;
        }

        Ok(CreateFoodLog {
            food_name: request.food_name.trim().to_string(),
            calories: request.calories,
            protein: request.protein,
            carbs: request.carbs,
            fat: request.fat,
            date_logged: request.date_logged,
        })
    }
}

fn to_response(record: FoodLogRecord) -> FoodLogResponse {
    FoodLogResponse {
        id: record.id,
        food_name: record.food_name,
        calories: record.calories,
        protein: record.protein,
        carbs: record.carbs,
        fat: record.fat,
        date_logged: record.date_logged,
    }
}
