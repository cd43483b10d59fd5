//! Database repositories
//!
//! Provides data access layer for database operations. Every query over a
//! user-owned table takes an [`Owner`] and filters by it.

pub mod food_log;
pub mod user;
pub mod workout;

pub use food_log::{CreateFoodLog, FoodLogRecord, FoodLogRepository};
pub use user::{UserRecord, UserRepository};
pub use workout::{
    CreateSetLog, CreateWorkoutSession, SetLogRecord, WorkoutSessionRecord,
    WorkoutSessionRepository,
};

/// Authenticated owner of the rows a query may touch
///
/// Only constructible inside the crate, from a verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner(i64);

impl Owner {
    pub(crate) fn new(user_id: i64) -> Self {
        Self(user_id)
    }

    /// Owning user's ID
    #[inline]
    pub fn id(self) -> i64 {
        self.0
    }
}
