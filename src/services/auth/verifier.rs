//! Bearer token verification.
//!
//! Turns a raw credential into a verified [`Subject`]. Two modes:
//! - `require_subject`: every failure is reported as a typed [`AuthError`].
//! - `optional_subject`: every failure collapses to `None`.
//!
//! Verification is a pure function of (credential, secret, current time).

use std::{fmt, sync::Arc};

use serde_json::Value;
use thiserror::Error;

use crate::services::auth::decoder::{Claims, ClaimsDecoder, DecodeError, Hs256Decoder};
use crate::services::auth::secret::Secret;

const USER_ID_CLAIM: &str = "user_id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Server misconfiguration: no secret to verify against.
    #[error("token secret is not configured")]
    Configuration,
    #[error("missing bearer credential")]
    MissingCredential,
    #[error("invalid token: {0}")]
    InvalidToken(InvalidTokenReason),
    #[error("token expired")]
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTokenReason {
    Decode(String),
    MissingUserId,
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "{}", e),
            Self::MissingUserId => write!(f, "missing user_id"),
        }
    }
}

impl From<DecodeError> for AuthError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::Expired => Self::Expired,
            DecodeError::Malformed(reason) => {
                Self::InvalidToken(InvalidTokenReason::Decode(reason))
            }
        }
    }
}

/// Verified identity taken from the `user_id` claim. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone)]
pub struct TokenVerifier {
    secret: Option<Secret>,
    decoder: Arc<dyn ClaimsDecoder>,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("secret", &self.secret)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    pub fn new(secret: Option<Secret>, decoder: Arc<dyn ClaimsDecoder>) -> Self {
        Self { secret, decoder }
    }

    /// HS256 verifier with the given clock-skew leeway.
    pub fn hs256(secret: Option<Secret>, leeway_seconds: u64) -> Self {
        Self::new(secret, Arc::new(Hs256Decoder::new(leeway_seconds)))
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Mandatory mode.
    ///
    /// Check order: secret, credential presence, signature/structure, expiry, `user_id`.
    pub fn require_subject(&self, credential: Option<&str>) -> Result<Subject, AuthError> {
        let secret = self.secret.as_ref().ok_or(AuthError::Configuration)?;

        let token = credential
            .filter(|c| !c.is_empty())
            .ok_or(AuthError::MissingCredential)?;

        let claims = self.decoder.decode(token, secret)?;

        subject_from_claims(&claims)
            .ok_or(AuthError::InvalidToken(InvalidTokenReason::MissingUserId))
    }

    /// Optional mode: `None` for any failure, including an unconfigured secret.
    pub fn optional_subject(&self, credential: Option<&str>) -> Option<Subject> {
        self.require_subject(credential).ok()
    }
}

// `user_id` may be a non-empty string or a non-zero number (rendered as its JSON text).
// Zero counts as empty, like `""`.
fn subject_from_claims(claims: &Claims) -> Option<Subject> {
    match claims.get(USER_ID_CLAIM)? {
        Value::String(s) if !s.is_empty() => Some(Subject(s.clone())),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(Subject(n.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use serde_json::json;

    fn sign(claims: &Value, key: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .expect("failed to create test token")
    }

    fn verifier(secret: &str) -> TokenVerifier {
        TokenVerifier::hs256(Secret::new(secret), 0)
    }

    fn ten_seconds_ago() -> i64 {
        chrono::Utc::now().timestamp() - 10
    }

    /// Returns the same outcome for any token; no cryptography involved.
    struct StubDecoder(Result<Claims, DecodeError>);

    impl ClaimsDecoder for StubDecoder {
        fn decode(&self, _token: &str, _secret: &Secret) -> Result<Claims, DecodeError> {
            self.0.clone()
        }
    }

    fn stubbed(outcome: Result<Value, DecodeError>) -> TokenVerifier {
        let outcome = outcome.map(|v| match v {
            Value::Object(map) => map,
            other => panic!("stub claims must be an object, got {other}"),
        });
        TokenVerifier::new(Secret::new("s3cr3t"), Arc::new(StubDecoder(outcome)))
    }

    #[test]
    fn returns_user_id_for_valid_token() {
        let token = sign(&json!({"user_id": "42"}), "s3cr3t");

        let subject = verifier("s3cr3t")
            .require_subject(Some(&token))
            .expect("valid token");

        assert_eq!(subject.as_str(), "42");
    }

    #[test]
    fn accepts_unexpired_token() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = sign(&json!({"user_id": "user-123", "exp": exp}), "s3cr3t");

        let subject = verifier("s3cr3t").require_subject(Some(&token));

        assert_eq!(subject.map(Subject::into_string), Ok("user-123".to_string()));
    }

    #[test]
    fn token_from_other_secret_is_invalid() {
        let token = sign(&json!({"user_id": "42"}), "wrong");

        let result = verifier("s3cr3t").require_subject(Some(&token));

        assert!(matches!(
            result,
            Err(AuthError::InvalidToken(InvalidTokenReason::Decode(_)))
        ));
    }

    #[test]
    fn past_expiry_is_expired() {
        let token = sign(&json!({"user_id": "42", "exp": ten_seconds_ago()}), "s3cr3t");

        let result = verifier("s3cr3t").require_subject(Some(&token));

        assert_eq!(result, Err(AuthError::Expired));
    }

    #[test]
    fn absent_or_empty_credential_is_missing() {
        let v = verifier("s3cr3t");

        assert_eq!(v.require_subject(None), Err(AuthError::MissingCredential));
        assert_eq!(v.require_subject(Some("")), Err(AuthError::MissingCredential));
        assert_eq!(v.optional_subject(None), None);
        assert_eq!(v.optional_subject(Some("")), None);
    }

    #[test]
    fn missing_user_id_is_invalid() {
        let token = sign(&json!({"sub": "42"}), "s3cr3t");

        let result = verifier("s3cr3t").require_subject(Some(&token));

        assert_eq!(
            result,
            Err(AuthError::InvalidToken(InvalidTokenReason::MissingUserId))
        );
    }

    #[test]
    fn empty_zero_or_non_scalar_user_id_is_invalid() {
        for user_id in [
            json!(""),
            json!(0),
            json!(0.0),
            json!(null),
            json!(true),
            json!(["42"]),
            json!({}),
        ] {
            let token = sign(&json!({ "user_id": user_id }), "s3cr3t");

            let result = verifier("s3cr3t").require_subject(Some(&token));

            assert_eq!(
                result,
                Err(AuthError::InvalidToken(InvalidTokenReason::MissingUserId)),
                "user_id {user_id} should be rejected"
            );
        }
    }

    #[test]
    fn numeric_user_id_is_coerced_to_string() {
        let token = sign(&json!({"user_id": 42}), "s3cr3t");

        let subject = verifier("s3cr3t").require_subject(Some(&token));

        assert_eq!(subject.map(Subject::into_string), Ok("42".to_string()));
    }

    #[test]
    fn unconfigured_secret_is_configuration_error() {
        let v = TokenVerifier::hs256(None, 0);
        let token = sign(&json!({"user_id": "42"}), "s3cr3t");

        assert!(!v.is_configured());
        for credential in [None, Some(""), Some("garbage"), Some(token.as_str())] {
            assert_eq!(v.require_subject(credential), Err(AuthError::Configuration));
            assert_eq!(v.optional_subject(credential), None);
        }
    }

    #[test]
    fn verification_is_idempotent() {
        let v = verifier("s3cr3t");
        let token = sign(&json!({"user_id": "42"}), "s3cr3t");

        let first = v.require_subject(Some(&token));
        let second = v.require_subject(Some(&token));

        assert_eq!(first, second);
        assert!(first.is_ok());
    }

    #[test]
    fn optional_mode_swallows_every_failure() {
        let v = verifier("s3cr3t");
        let wrong = sign(&json!({"user_id": "42"}), "wrong");
        let expired = sign(&json!({"user_id": "42", "exp": ten_seconds_ago()}), "s3cr3t");
        let empty_user = sign(&json!({"user_id": ""}), "s3cr3t");

        assert_eq!(v.optional_subject(Some("not-a-jwt")), None);
        assert_eq!(v.optional_subject(Some(&wrong)), None);
        assert_eq!(v.optional_subject(Some(&expired)), None);
        assert_eq!(v.optional_subject(Some(&empty_user)), None);
    }

    #[test]
    fn optional_mode_returns_subject_for_valid_token() {
        let token = sign(&json!({"user_id": "42"}), "s3cr3t");

        let subject = verifier("s3cr3t").optional_subject(Some(&token));

        assert_eq!(subject.as_ref().map(Subject::as_str), Some("42"));
    }

    #[test]
    fn decoder_outcomes_map_to_auth_errors() {
        assert_eq!(
            stubbed(Err(DecodeError::Expired)).require_subject(Some("t")),
            Err(AuthError::Expired)
        );
        assert_eq!(
            stubbed(Err(DecodeError::Malformed("bad".into()))).require_subject(Some("t")),
            Err(AuthError::InvalidToken(InvalidTokenReason::Decode(
                "bad".into()
            )))
        );
        assert_eq!(
            stubbed(Ok(json!({"user_id": "7"})))
                .require_subject(Some("t"))
                .map(Subject::into_string),
            Ok("7".to_string())
        );
    }

    #[test]
    fn missing_credential_is_checked_before_decoding() {
        let v = stubbed(Ok(json!({"user_id": "7"})));

        assert_eq!(v.require_subject(None), Err(AuthError::MissingCredential));
    }

    #[test]
    fn auth_error_display() {
        assert_eq!(
            AuthError::InvalidToken(InvalidTokenReason::MissingUserId).to_string(),
            "invalid token: missing user_id"
        );
        assert_eq!(AuthError::Expired.to_string(), "token expired");
    }
}
