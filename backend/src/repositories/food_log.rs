//! Food log repository for database operations

use super::Owner;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Food log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodLogRecord {
    pub id: i64,
    pub user_id: i64,
    pub food_name: String,
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub date_logged: DateTime<Utc>,
}

/// Input for creating a food log
#[derive(Debug, Clone)]
pub struct CreateFoodLog {
    pub food_name: String,
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub date_logged: DateTime<Utc>,
}

/// Food log repository
pub struct FoodLogRepository;

impl FoodLogRepository {
    /// Log a food entry for the owner
    pub async fn create(pool: &PgPool, owner: Owner, input: CreateFoodLog) -> Result<FoodLogRecord> {
        let record = sqlx::query_as::<_, FoodLogRecord>(
            r#"
            INSERT INTO food_logs (user_id, food_name, calories, protein, carbs, fat, date_logged)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, food_name, calories, protein, carbs, fat, date_logged
            "#,
        )
        .bind(owner.id())
        .bind(&input.food_name)
        .bind(input.calories)
        .bind(input.protein)
        .bind(input.carbs)
        .bind(input.fat)
        .bind(input.date_logged)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get the owner's food logs, most recent first
    pub async fn list(pool: &PgPool, owner: Owner) -> Result<Vec<FoodLogRecord>> {
        let records = sqlx::query_as::<_, FoodLogRecord>(
            r#"
            SELECT id, user_id, food_name, calories, protein, carbs, fat, date_logged
            FROM food_logs
            WHERE user_id = $1
            ORDER BY date_logged DESC, id DESC
            "#,
        )
        .bind(owner.id())
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete a food log; false if absent or not owned
    pub async fn delete(pool: &PgPool, owner: Owner, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM food_logs WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(owner.id())
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
