//! Signed-claims decoding.
//!
//! `ClaimsDecoder` is the seam between the verifier and the JWT library so that
//! verifier logic can be exercised with a deterministic stand-in.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::Value;
use thiserror::Error;

use crate::services::auth::secret::Secret;

/// Upper bound for clock-skew leeway. jsonwebtoken does unchecked `now ± leeway`
/// arithmetic on u64, so the value must stay small.
pub const MAX_LEEWAY_SECONDS: u64 = 24 * 60 * 60;

/// Decoded JWT payload (claim name -> value).
pub type Claims = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Bad segments / base64 / JSON, signature mismatch, wrong algorithm, bad claim format.
    #[error("malformed token: {0}")]
    Malformed(String),
    /// Signature is valid but `exp` is in the past.
    #[error("token expired")]
    Expired,
}

pub trait ClaimsDecoder: Send + Sync {
    fn decode(&self, token: &str, secret: &Secret) -> Result<Claims, DecodeError>;
}

/// HS256-only decoder backed by `jsonwebtoken`.
///
/// The algorithm is pinned: tokens announcing anything else (including `none`)
/// are rejected before the signature is looked at.
#[derive(Debug, Clone)]
pub struct Hs256Decoder {
    validation: Validation,
    leeway_seconds: u64,
}

impl Hs256Decoder {
    /// `leeway_seconds` is clamped to [`MAX_LEEWAY_SECONDS`].
    pub fn new(leeway_seconds: u64) -> Self {
        let leeway_seconds = leeway_seconds.min(MAX_LEEWAY_SECONDS);

        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens from the frontend only guarantee `user_id`.
        validation.required_spec_claims.clear();
        // jsonwebtoken reads `exp` as u64 and accepts `exp == now`; `check_exp_claim` owns it.
        validation.validate_exp = false;
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds;

        Self {
            validation,
            leeway_seconds,
        }
    }
}

impl Default for Hs256Decoder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ClaimsDecoder for Hs256Decoder {
    fn decode(&self, token: &str, secret: &Secret) -> Result<Claims, DecodeError> {
        let key = DecodingKey::from_secret(secret.as_bytes());

        let data = jsonwebtoken::decode::<Claims>(token, &key, &self.validation)
            .map_err(map_jwt_error)?;

        check_exp_claim(&data.claims, self.leeway_seconds)?;

        Ok(data.claims)
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> DecodeError {
    DecodeError::Malformed(error.to_string())
}

// Any JSON number is a valid `exp` (integer, fractional, negative). The token is
// expired once `exp <= now - leeway`, i.e. `exp` must be strictly in the future.
fn check_exp_claim(claims: &Claims, leeway_seconds: u64) -> Result<(), DecodeError> {
    let exp = match claims.get("exp") {
        None => return Ok(()),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| DecodeError::Malformed("'exp' is not a number".into()))?,
        Some(_) => return Err(DecodeError::Malformed("'exp' is not a number".into())),
    };

    let now = chrono::Utc::now().timestamp() as f64;
    if exp <= now - leeway_seconds as f64 {
        return Err(DecodeError::Expired);
    }

    Ok(())
}
