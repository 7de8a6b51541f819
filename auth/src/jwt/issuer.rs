use std::time::Duration;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies short-lived bearer tokens.
///
/// Tokens are signed with HS256. Verification accepts only the HMAC family, so
/// a token whose header names any other algorithm is rejected before the
/// signature is looked at.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Length in bytes of a generated signing key.
    pub const KEY_LENGTH: usize = 32;

    /// Lifetime of an issued token.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

    /// Create an issuer with a fresh random key from the OS CSPRNG.
    ///
    /// The key only lives in memory: dropping the issuer (or restarting the
    /// process) invalidates every token it issued.
    ///
    /// # Errors
    /// * `KeyGenerationFailed` - The OS random source failed
    pub fn generate() -> Result<Self, TokenError> {
        let mut key = [0u8; Self::KEY_LENGTH];
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|e| TokenError::KeyGenerationFailed(e.to_string()))?;

        Ok(Self::from_secret(&key))
    }

    /// Create an issuer from an explicit secret.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256)
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Self::DEFAULT_TTL,
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Lifetime applied to tokens from [`TokenIssuer::issue`].
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for an identity, expiring after the configured lifetime.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue(&self, identity: &str) -> Result<String, TokenError> {
        self.sign(&Claims::for_identity(identity, self.ttl))
    }

    /// Sign an explicit claim set.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token, missing claims, or non-HMAC algorithm
    /// * `SignatureMismatch` - Token was signed with a different key
    /// * `Expired` - Token expiry is in the past
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                _ => TokenError::InvalidToken(e.to_string()),
            })
    }
}
