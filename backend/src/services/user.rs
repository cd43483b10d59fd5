//! User service for registration, login and profile lookup
//!
//! Password hashing and verification run on the blocking thread pool.
//! Login failures never reveal whether the username exists.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use fitness_tracker_shared::validation::{validate_email, validate_username};
use fitness_tracker_shared::{LoginResponse, UserResponse};
use once_cell::sync::Lazy;
use sqlx::PgPool;
use tracing::{info, warn};

/// Verified against when the username is unknown, so both failure paths
/// cost one hash verification. Computing it is a full Argon2 hash, so it is
/// only ever forced on the blocking pool.
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| PasswordService::hash("placeholder-password").unwrap_or_default());

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, ApiError> {
        let username = username.trim();
        let email = email.trim();
        validate_username(username).map_err(ApiError::Validation)?;
        validate_email(email).map_err(ApiError::Validation)?;

        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        // A concurrent registration can still win the unique index
        let user = UserRepository::create(pool, username, email, &password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Conflict("Username already taken".to_string())
                } else {
                    ApiError::Internal(e)
                }
            })?;

        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(to_user_response(user))
    }

    /// Login with username and password, returning a bearer token
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let candidate = UserRepository::find_by_username(pool, username.trim())
            .await
            .map_err(ApiError::Internal)?;

        let user = Self::authenticate(candidate, password.to_string()).await?;

        let token = jwt_service
            .issue(user.id, &user.username)
            .map_err(ApiError::Internal)?;

        info!(user_id = user.id, "user logged in");
        Ok(LoginResponse { token })
    }

    /// Check a password against an optional user record
    ///
    /// Unknown user and wrong password produce the same error.
    pub async fn authenticate(
        candidate: Option<UserRecord>,
        password: String,
    ) -> Result<UserRecord, ApiError> {
        let stored = candidate.as_ref().map(|user| user.password_hash.clone());

        let valid = tokio::task::spawn_blocking(move || {
            let hash = stored.as_deref().unwrap_or(DUMMY_HASH.as_str());
            PasswordService::verify(&password, hash)
        })
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Task join error: {}", e)))?;

        match candidate {
            Some(user) if valid => Ok(user),
            Some(user) => {
                warn!(user_id = user.id, "login failed: wrong password");
                Err(ApiError::InvalidCredentials)
            }
            None => {
                warn!("login failed: unknown username");
                Err(ApiError::InvalidCredentials)
            }
        }
    }

    /// Compute the unknown-user hash ahead of the first login
    ///
    /// Blocking; run it on the blocking pool.
    pub fn warm_up() {
        Lazy::force(&DUMMY_HASH);
    }

    /// Get the caller's own user record
    pub async fn get_profile(pool: &PgPool, user_id: i64) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(to_user_response(user))
    }
}

fn to_user_response(user: UserRecord) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
    }
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
