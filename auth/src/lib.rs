//! Authentication utilities library
//!
//! Provides the stateless authentication core for the marketplace service:
//! - Password hashing (Argon2id)
//! - Signing key and token lifetime configuration
//! - Bearer token issuing and validation (HS256 JWT)
//! - Authentication coordination
//!
//! Nothing here performs I/O. Tokens are never stored server-side, so expiry
//! is the only way a token stops being valid.
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
//! use auth::{JwtHandler, SigningKey, TokenConfig};
//! use chrono::Utc;
//!
//! let key = SigningKey::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let handler = JwtHandler::new(&TokenConfig::with_hours(key, 24));
//! let now = Utc::now();
//! let token = handler.issue("account123", now).unwrap();
//! let claims = handler.validate(&token, now).unwrap();
//! assert_eq!(claims.sub, "account123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SigningKey, TokenConfig};
//! use chrono::Utc;
//!
//! let key = SigningKey::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&TokenConfig::with_hours(key, 24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", &hash, "account123", Utc::now())
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token, Utc::now()).unwrap();
//! assert_eq!(claims.sub, "account123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::KeyError;
pub use jwt::SigningKey;
pub use jwt::TokenConfig;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
