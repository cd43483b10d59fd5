//! Bearer token issuance and validation
//!
//! Tokens are HS512 JWTs with a fixed 24 hour lifetime. Keys are derived
//! once from the configured secret and shared through `AppState`.

use crate::config::AppSettings;
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use fitness_tracker_shared::AuthError;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Lifetime of every issued token
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

const ALGORITHM: Algorithm = Algorithm::HS512;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (numeric user ID as a string)
    pub sub: String,
    /// Username at the time of login
    pub name: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    /// Numeric user ID carried in `sub`
    pub fn user_id(&self) -> Result<i64, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}

/// Pre-computed JWT keys
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret)),
            decoding: Arc::new(DecodingKey::from_secret(secret)),
        }
    }
}

/// JWT service for token operations
///
/// Issuer and audience are optional. When configured they are stamped on
/// every token and required on validation; otherwise neither is checked.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    issuer: Option<String>,
    audience: Option<String>,
    validation: Arc<Validation>,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &[u8], issuer: Option<String>, audience: Option<String>) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        // set_issuer/set_audience only check claims that are present
        let mut required = vec!["exp"];
        if issuer.is_some() {
            required.push("iss");
        }
        if audience.is_some() {
            required.push("aud");
        }
        validation.set_required_spec_claims(&required);

        match &issuer {
            Some(iss) => validation.set_issuer(&[iss]),
            None => validation.iss = None,
        }
        match &audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }

        Self {
            keys: JwtKeys::new(secret),
            issuer,
            audience,
            validation: Arc::new(validation),
        }
    }

    /// Build the service from the `app_settings` configuration section
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            settings.token.expose_secret().as_bytes(),
            settings.issuer.clone(),
            settings.audience.clone(),
        )
    }

    /// Issue a token for a verified identity
    #[inline]
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, user_id: i64, username: &str, issued_at: DateTime<Utc>) -> Result<String> {
        let exp = issued_at + Self::token_lifetime();

        let claims = Claims {
            sub: user_id.to_string(),
            name: username.to_string(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;
        debug!(user_id, "token issued");
        Ok(token)
    }

    /// Validate signature, expiry and (when configured) issuer/audience
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Fixed token lifetime
    pub fn token_lifetime() -> Duration {
        Duration::hours(TOKEN_LIFETIME_HOURS)
    }
}
