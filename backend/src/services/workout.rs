//! Workout session service
//!
//! Validates new sessions, stamps them with the caller as owner and shapes
//! stored rows into API responses.

use crate::error::ApiError;
use crate::repositories::{
    CreateSetLog, CreateWorkoutSession, Owner, SetLogRecord, WorkoutSessionRecord,
    WorkoutSessionRepository,
};
use fitness_tracker_shared::validation::{validate_name, validate_non_negative, validate_reps};
use fitness_tracker_shared::{
    CreateWorkoutSessionRequest, SetLogInput, SetLogResponse, WorkoutSessionResponse,
};
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::info;

/// Message for sessions that are absent or owned by someone else
pub const SESSION_NOT_FOUND: &str =
    "Workout session not found or you do not have permission to access it.";

/// Message for a failed delete; the same for absent and foreign sessions
pub const SESSION_NOT_FOUND_FOR_DELETE: &str =
    "Workout session not found or you do not have permission to delete it.";

/// Workout session service
pub struct WorkoutService;

impl WorkoutService {
    /// Create a session with its sets for the caller
    pub async fn create_session(
        pool: &PgPool,
        owner: Owner,
        request: CreateWorkoutSessionRequest,
    ) -> Result<WorkoutSessionResponse, ApiError> {
        let input = Self::validate_request(request)?;
        let (session, sets) = WorkoutSessionRepository::create(pool, owner, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(
            user_id = owner.id(),
            session_id = session.id,
            sets = sets.len(),
            "workout session created"
        );
        Ok(to_response(session, sets))
    }

    /// List the caller's sessions, newest first, each with its sets
    pub async fn list_sessions(
        pool: &PgPool,
        owner: Owner,
    ) -> Result<Vec<WorkoutSessionResponse>, ApiError> {
        let sessions = WorkoutSessionRepository::list(pool, owner)
            .await
            .map_err(ApiError::Internal)?;
        let sets = WorkoutSessionRepository::list_sets(pool, owner)
            .await
            .map_err(ApiError::Internal)?;

        Ok(attach_sets(sessions, sets))
    }

    /// Get one of the caller's sessions
    pub async fn get_session(
        pool: &PgPool,
        owner: Owner,
        id: i64,
    ) -> Result<WorkoutSessionResponse, ApiError> {
        let (session, sets) = WorkoutSessionRepository::get(pool, owner, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(SESSION_NOT_FOUND.to_string()))?;

        Ok(to_response(session, sets))
    }

    /// Delete one of the caller's sessions and its sets
    pub async fn delete_session(pool: &PgPool, owner: Owner, id: i64) -> Result<(), ApiError> {
        let deleted = WorkoutSessionRepository::delete(pool, owner, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(SESSION_NOT_FOUND_FOR_DELETE.to_string()));
        }

        info!(user_id = owner.id(), session_id = id, "workout session deleted");
        Ok(())
    }

    /// Validate a create request and convert it to repository input
    pub fn validate_request(
        request: CreateWorkoutSessionRequest,
    ) -> Result<CreateWorkoutSession, ApiError> {
        let sets = request
            .sets
            .into_iter()
            .enumerate()
            .map(|(index, set)| validate_set(set).map_err(|msg| set_error(index, msg)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CreateWorkoutSession {
            date: request.date,
            sets,
        })
    }
}

fn validate_set(set: SetLogInput) -> Result<CreateSetLog, String> {
    validate_name("Exercise name", &set.exercise_name)?;
    validate_reps(set.reps)?;
    validate_non_negative("Weight", set.weight)?;

    Ok(CreateSetLog {
        exercise_name: set.exercise_name.trim().to_string(),
        reps: set.reps,
        weight: set.weight,
    })
}

fn set_error(index: usize, message: String) -> ApiError {
    ApiError::Validation(format!("sets[{}]: {}", index, message))
}

fn to_set_response(set: SetLogRecord) -> SetLogResponse {
    SetLogResponse {
        id: set.id,
        exercise_name: set.exercise_name,
        reps: set.reps,
        weight: set.weight,
    }
}

fn to_response(session: WorkoutSessionRecord, sets: Vec<SetLogRecord>) -> WorkoutSessionResponse {
    WorkoutSessionResponse {
        id: session.id,
        date: session.date,
        sets: sets.into_iter().map(to_set_response).collect(),
    }
}

/// Group sets under their sessions, keeping both input orders
fn attach_sets(
    sessions: Vec<WorkoutSessionRecord>,
    sets: Vec<SetLogRecord>,
) -> Vec<WorkoutSessionResponse> {
    let mut by_session: HashMap<i64, Vec<SetLogRecord>> = HashMap::new();
    for set in sets {
        by_session.entry(set.workout_session_id).or_default().push(set);
    }

    sessions
        .into_iter()
        .map(|session| {
            let sets = by_session.remove(&session.id).unwrap_or_default();
            to_response(session, sets)
        })
        .collect()
}
