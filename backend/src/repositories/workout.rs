//! Workout session and set repository for database operations

use super::Owner;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Workout session record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutSessionRecord {
    pub id: i64,
    pub user_id: i64,
    pub date: DateTime<Utc>,
}

/// Set record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SetLogRecord {
    pub id: i64,
    pub workout_session_id: i64,
    pub exercise_name: String,
    pub reps: i32,
    pub weight: f32,
}

/// Input for creating a workout session
#[derive(Debug, Clone)]
pub struct CreateWorkoutSession {
    pub date: DateTime<Utc>,
    pub sets: Vec<CreateSetLog>,
}

/// Input for one set of a new session
#[derive(Debug, Clone)]
pub struct CreateSetLog {
    pub exercise_name: String,
    pub reps: i32,
    pub weight: f32,
}

/// Workout session repository
pub struct WorkoutSessionRepository;

impl WorkoutSessionRepository {
    /// Create a session and its sets in one transaction
    ///
    /// Sets are inserted, and returned, in input order.
    pub async fn create(
        pool: &PgPool,
        owner: Owner,
        input: CreateWorkoutSession,
    ) -> Result<(WorkoutSessionRecord, Vec<SetLogRecord>)> {
        let mut tx = pool.begin().await?;

        let session = sqlx::query_as::<_, WorkoutSessionRecord>(
            r#"
            INSERT INTO workout_sessions (user_id, date)
            VALUES ($1, $2)
            RETURNING id, user_id, date
            "#,
        )
        .bind(owner.id())
        .bind(input.date)
        .fetch_one(&mut *tx)
        .await?;

        let mut sets = Vec::with_capacity(input.sets.len());
        for set in input.sets {
            let record = sqlx::query_as::<_, SetLogRecord>(
                r#"
                INSERT INTO set_logs (workout_session_id, exercise_name, reps, weight)
                VALUES ($1, $2, $3, $4)
                RETURNING id, workout_session_id, exercise_name, reps, weight
                "#,
            )
            .bind(session.id)
            .bind(&set.exercise_name)
            .bind(set.reps)
            .bind(set.weight)
            .fetch_one(&mut *tx)
            .await?;
            sets.push(record);
        }

        tx.commit().await?;

        Ok((session, sets))
    }

    /// Get the owner's sessions, most recent first
    pub async fn list(pool: &PgPool, owner: Owner) -> Result<Vec<WorkoutSessionRecord>> {
        let records = sqlx::query_as::<_, WorkoutSessionRecord>(
            r#"
            SELECT id, user_id, date
            FROM workout_sessions
            WHERE user_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(owner.id())
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get all sets belonging to the owner's sessions, in insertion order
    pub async fn list_sets(pool: &PgPool, owner: Owner) -> Result<Vec<SetLogRecord>> {
        let records = sqlx::query_as::<_, SetLogRecord>(
            r#"
            SELECT s.id, s.workout_session_id, s.exercise_name, s.reps, s.weight
            FROM set_logs s
            JOIN workout_sessions w ON w.id = s.workout_session_id
            WHERE w.user_id = $1
            ORDER BY s.id ASC
            "#,
        )
        .bind(owner.id())
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get one session with its sets, if the owner owns it
    pub async fn get(
        pool: &PgPool,
        owner: Owner,
        id: i64,
    ) -> Result<Option<(WorkoutSessionRecord, Vec<SetLogRecord>)>> {
        let session = sqlx::query_as::<_, WorkoutSessionRecord>(
            r#"
            SELECT id, user_id, date
            FROM workout_sessions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner.id())
        .fetch_optional(pool)
        .await?;

        let Some(session) = session else {
            return Ok(None);
        };

        let sets = sqlx::query_as::<_, SetLogRecord>(
            r#"
            SELECT id, workout_session_id, exercise_name, reps, weight
            FROM set_logs
            WHERE workout_session_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(session.id)
        .fetch_all(pool)
        .await?;

        Ok(Some((session, sets)))
    }

    /// Delete a session (sets cascade); false if absent or not owned
    pub async fn delete(pool: &PgPool, owner: Owner, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM workout_sessions WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(owner.id())
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
