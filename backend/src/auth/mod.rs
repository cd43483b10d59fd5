//! Authentication module
//!
//! Provides HS512 bearer tokens, the request authentication gate and
//! argon2 password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, TOKEN_LIFETIME_HOURS};
pub use middleware::{require_auth, AuthUser};
pub use password::PasswordService;
