use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
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
use super::key::TokenConfig;

/// JWT token handler issuing and validating bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256), so issuing is deterministic for a given
/// subject, instant, and key. Validation never touches storage: the subject
/// is trusted on the strength of the signature alone.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler from token configuration.
    ///
    /// # Arguments
    /// * `config` - Signing key and token lifetime
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    pub fn new(config: &TokenConfig) -> Self {
        let secret = config.key.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: config.ttl,
        }
    }

    /// Lifetime given to every issued token.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Account identifier to embed
    /// * `now` - Issue instant; the token expires at `now + ttl`
    ///
    /// # Returns
    /// Compact JWS string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, now, self.ttl);
        self.encode(&claims)
    }

    /// Sign arbitrary claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// Structure is checked first, then the signature, then expiry against
    /// the supplied instant.
    ///
    /// # Arguments
    /// * `token` - Compact JWS string
    /// * `now` - Validation instant
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Token is not a well-formed HS256 JWS with the expected claims
    /// * `BadSignature` - Signature does not match the signing key
    /// * `Expired` - `now` is at or past the expiry
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;

        if token_data.claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::jwt::SigningKey;

    fn handler_with(secret: &[u8]) -> JwtHandler {
        let key = SigningKey::new(secret).expect("valid test key");
        JwtHandler::new(&TokenConfig::with_hours(key, 24))
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_and_validate() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");

        let token = handler.issue("account123", t0()).expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = handler.validate(&token, t0()).expect("Failed to validate token");
        assert_eq!(claims.subject(), "account123");
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, (t0() + Duration::hours(24)).timestamp());
    }

    #[test]
    fn test_valid_throughout_lifetime() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");
        let token = handler.issue("account123", t0()).unwrap();

        for offset in [
            Duration::zero(),
            Duration::seconds(1),
            Duration::hours(12),
            Duration::hours(24) - Duration::seconds(1),
        ] {
            let claims = handler
                .validate(&token, t0() + offset)
                .expect("token should be valid inside its lifetime");
            assert_eq!(claims.sub, "account123");
        }
    }

    #[test]
    fn test_expired_at_and_after_ttl() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");
        let token = handler.issue("account123", t0()).unwrap();

        assert_eq!(
            handler.validate(&token, t0() + Duration::hours(24)),
            Err(TokenError::Expired)
        );
        assert_eq!(
            handler.validate(&token, t0() + Duration::days(30)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_issue_is_deterministic() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");

        let first = handler.issue("account123", t0()).unwrap();
        let second = handler.issue("account123", t0()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_with_wrong_key() {
        let handler1 = handler_with(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = handler_with(b"secret2_at_least_32_bytes_long_key!");

        for subject in ["a", "account123", "f47ac10b-58cc-4372-a567-0e02b2c3d479"] {
            let token = handler1.issue(subject, t0()).unwrap();
            assert_eq!(
                handler2.validate(&token, t0()),
                Err(TokenError::BadSignature)
            );
        }
    }

    #[test]
    fn test_validate_garbage() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");

        assert_eq!(handler.validate("", t0()), Err(TokenError::Malformed));
        assert_eq!(handler.validate("garbage", t0()), Err(TokenError::Malformed));
        assert_eq!(
            handler.validate("invalid.token.here", t0()),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_single_character_mutation_never_validates() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");
        let token = handler.issue("account123", t0()).unwrap();

        for (index, original) in token.char_indices() {
            let replacement = if original == 'A' { 'B' } else { 'A' };
            let mut mutated = token.clone();
            mutated.replace_range(index..index + 1, &replacement.to_string());

            let result = handler.validate(&mutated, t0());
            assert!(
                matches!(
                    result,
                    Err(TokenError::BadSignature) | Err(TokenError::Malformed)
                ),
                "mutation at {} produced {:?}",
                index,
                result
            );
        }
    }

    #[test]
    fn test_missing_subject_is_malformed() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");
        let key = EncodingKey::from_secret(b"my_secret_key_at_least_32_bytes_long!");
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "exp": t0().timestamp() + 60, "iat": t0().timestamp() }),
            &key,
        )
        .unwrap();

        assert_eq!(handler.validate(&token, t0()), Err(TokenError::Malformed));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");
        let key = EncodingKey::from_secret(b"my_secret_key_at_least_32_bytes_long!");
        let claims = Claims::for_subject("account123", t0(), Duration::hours(1));
        let token = encode(&Header::new(Algorithm::HS512), &claims, &key).unwrap();

        assert!(handler.validate(&token, t0()).is_err());
    }

    #[test]
    fn test_past_expiry_with_valid_signature() {
        let handler = handler_with(b"my_secret_key_at_least_32_bytes_long!");
        let claims = Claims {
            sub: "account123".to_string(),
            iat: t0().timestamp() - 7200,
            exp: t0().timestamp() - 3600,
        };
        let token = handler.encode(&claims).unwrap();

        assert_eq!(handler.validate(&token, t0()), Err(TokenError::Expired));
    }
}
