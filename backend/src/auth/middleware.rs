//! Authentication gate
//!
//! `require_auth` runs as a route layer in front of every protected route:
//! it validates the bearer token and stores the caller's identity in the
//! request extensions. Handlers read it back with the `AuthUser` extractor.

use crate::error::ApiError;
use crate::repositories::Owner;
use crate::state::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use fitness_tracker_shared::AuthError;
use tracing::warn;

/// Identity proven by a valid bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
}

impl AuthUser {
    /// Ownership scope for repository calls made on behalf of this caller
    pub fn owner(&self) -> Owner {
        Owner::new(self.user_id)
    }
}

const BEARER_SCHEME: &str = "Bearer ";

/// Extract the raw token from `Authorization: Bearer <token>`
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::from(AuthError::MissingToken))?;

    // The scheme name is case-insensitive
    let scheme = BEARER_SCHEME.len();
    auth_header
        .get(..scheme)
        .filter(|prefix| prefix.eq_ignore_ascii_case(BEARER_SCHEME))
        .and_then(|_| auth_header.get(scheme..))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))
}

/// Reject the request unless it carries a valid token
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let claims = state.jwt().verify(token).map_err(|e| {
        warn!(reason = %e, path = %request.uri().path(), "rejected bearer token");
        ApiError::from(e)
    })?;
    let user_id = claims.user_id()?;

    request.extensions_mut().insert(AuthUser {
        user_id,
        username: claims.name,
    });

    Ok(next.run(request).await)
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Present only on routes behind `require_auth`
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthError::MissingToken))
    }
}
