use std::fmt;

use chrono::Duration;

use super::errors::KeyError;

/// Server-held secret used to sign and verify tokens.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// HS256 wants at least as many key bytes as the digest length.
    pub const MIN_LENGTH: usize = 32;

    /// Create a signing key from raw secret bytes.
    ///
    /// # Arguments
    /// * `secret` - Secret key material
    ///
    /// # Returns
    /// Validated SigningKey
    ///
    /// # Errors
    /// * `Empty` - No key material supplied
    /// * `TooShort` - Fewer than 32 bytes
    pub fn new(secret: &[u8]) -> Result<Self, KeyError> {
        if secret.is_empty() {
            return Err(KeyError::Empty);
        }
        if secret.len() < Self::MIN_LENGTH {
            return Err(KeyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: secret.len(),
            });
        }
        Ok(Self(secret.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

/// Token issuing configuration: signing key plus time-to-live.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub key: SigningKey,
    pub ttl: Duration,
}

impl TokenConfig {
    pub fn new(key: SigningKey, ttl: Duration) -> Self {
        Self { key, ttl }
    }

    /// Configuration with a TTL expressed in whole hours.
    pub fn with_hours(key: SigningKey, hours: i64) -> Self {
        Self::new(key, Duration::hours(hours))
    }
}
