//! Authentication primitives for the catalog service
//!
//! - Password hashing (Argon2id, fixed cost)
//! - Bearer token issuing and verification (HMAC-SHA256 JWT)
//!
//! The service composes these in its own user rules; nothing here knows about
//! users or storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! // Fresh 32-byte key per process
//! let issuer = TokenIssuer::generate().unwrap();
//! let token = issuer.issue("alice").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
