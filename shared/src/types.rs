//! API request and response types
//!
//! Wire format uses camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Public view of a user (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

// ============================================================================
// Workout Types
// ============================================================================

/// One set within a new workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLogInput {
    pub exercise_name: String,
    pub reps: i32,
    pub weight: f32,
}

/// Create workout session request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutSessionRequest {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub sets: Vec<SetLogInput>,
}

/// Set as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLogResponse {
    pub id: i64,
    pub exercise_name: String,
    pub reps: i32,
    pub weight: f32,
}

/// Workout session with its sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSessionResponse {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub sets: Vec<SetLogResponse>,
}

// ============================================================================
// Food Log Types
// ============================================================================

/// Create food log request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodLogRequest {
    pub food_name: String,
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub date_logged: DateTime<Utc>,
}

/// Food log as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogResponse {
    pub id: i64,
    pub food_name: String,
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub date_logged: DateTime<Utc>,
}
