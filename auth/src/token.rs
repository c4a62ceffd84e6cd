//! Token encoding and decoding primitives.
//!
//! Tokens are JWS compact strings signed with HMAC-SHA256. The payload is a
//! flat map of the fixed claim names; decoding reconstructs a typed
//! [`Claims`] value from it.

use std::collections::BTreeMap;

use error::AuthError;
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use sha2::Sha256;

use crate::claims::{Claims, Role};

type HmacSha256 = Hmac<Sha256>;

/// Encode claims into a signed token string.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    let key = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        AuthError::TokenCreationFailed
    })?;

    let mut token_claims: BTreeMap<String, serde_json::Value> = BTreeMap::new();
    token_claims.insert("id".to_string(), serde_json::json!(claims.id));
    token_claims.insert("username".to_string(), serde_json::json!(claims.username));
    token_claims.insert("nickname".to_string(), serde_json::json!(claims.nickname));
    token_claims.insert(
        "roles".to_string(),
        serde_json::to_value(&claims.roles).unwrap(),
    );
    token_claims.insert("exp".to_string(), serde_json::json!(claims.exp));

    token_claims.sign_with_key(&key).map_err(|e| {
        tracing::error!("Failed to encode token: {}", e);
        AuthError::TokenCreationFailed
    })
}

/// Decode and validate a token string.
///
/// The signature is verified before any claim is read; the comparison is
/// constant-time. Claims are then extracted one by one and the expiration
/// checked against the current clock. The input is untrusted, so every
/// failure folds into an error here rather than propagating.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let key = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        tracing::error!("Failed to create HMAC key: {}", e);
        AuthError::InvalidToken
    })?;

    let token_claims: BTreeMap<String, serde_json::Value> =
        token.verify_with_key(&key).map_err(|e| {
            tracing::debug!("Failed to verify token: {}", e);
            AuthError::InvalidToken
        })?;

    let id = token_claims
        .get("id")
        .and_then(claim_as_i64)
        .ok_or(AuthError::InvalidToken)?;

    let username = token_claims
        .get("username")
        .and_then(|v| v.as_str())
        .ok_or(AuthError::InvalidToken)?
        .to_string();

    let nickname = token_claims
        .get("nickname")
        .and_then(|v| v.as_str())
        .ok_or(AuthError::InvalidToken)?
        .to_string();

    let roles: Vec<Role> = token_claims
        .get("roles")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .ok_or(AuthError::InvalidToken)?;

    let exp = token_claims
        .get("exp")
        .and_then(claim_as_i64)
        .ok_or(AuthError::InvalidToken)?;

    let claims = Claims {
        id,
        username,
        nickname,
        roles,
        exp,
    };

    if claims.is_expired() {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

/// Normalize a numeric claim to `i64`.
///
/// Generic JSON decoding may surface an integer claim as an unsigned or
/// floating number; integral values are widened, anything else is rejected.
fn claim_as_i64(value: &serde_json::Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => None,
    }
}
