//! Authentication routes
//!
//! Registration and login are public; `/auth/me` sits behind the token gate.
//! Password hashing runs on the blocking thread pool inside the service.

use super::protected;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitness_tracker_shared::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Create auth routes
pub fn auth_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    let private = protected(Router::new().route("/me", get(get_profile)), &state);

    public.merge(private)
}

/// Register a new user
///
/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::register(state.db(), &req.username, &req.email, &req.password).await?;
    Ok(Json(user))
}

/// Login with username and password
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = UserService::login(state.db(), state.jwt(), &req.username, &req.password).await?;
    Ok(Json(response))
}

/// Get the caller's own account
///
/// GET /auth/me
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let profile = UserService::get_profile(state.db(), auth_user.user_id).await?;
    Ok(Json(profile))
}
