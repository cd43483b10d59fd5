//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth layer.

pub mod food_log;
pub mod user;
pub mod workout;

pub use food_log::FoodLogService;
pub use user::UserService;
pub use workout::WorkoutService;
