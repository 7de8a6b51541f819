use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// The identity claim is the authenticated principal's username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated principal
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an identity, valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `username` - Identity claim
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with username, iat, and exp set
    pub fn for_identity(username: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        Self {
            username: username.to_string(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        }
    }
}
