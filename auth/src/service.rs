//! Access token issuance and verification service.

use error::{AuthError, ConfigError};
use serde::{Deserialize, Serialize};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::member::Member;
use crate::token::{decode_token, encode_token};

/// Normalized claim set handed to callers after verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Member ID
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Display name
    pub nickname: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            nickname: claims.nickname,
            exp: claims.exp,
        }
    }
}

/// Issues and verifies signed access tokens.
///
/// Holds only the immutable signing configuration, so a single instance is
/// safe to share across threads without locking.
#[derive(Debug, Clone)]
pub struct AccessTokenService {
    config: AuthConfig,
}

impl AccessTokenService {
    /// Create a new service, rejecting unusable configuration up front.
    pub fn new(config: AuthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Issue a signed access token for a member snapshot.
    pub fn issue(&self, member: &Member) -> Result<String, AuthError> {
        let claims = Claims::new(member, self.config.access_token_expire_secs);
        encode_token(&claims, &self.config.secret)
    }

    /// Verify a token and return its normalized payload.
    ///
    /// Forged, expired and malformed tokens all yield `None`; the caller
    /// cannot tell which case occurred.
    pub fn parse(&self, token: &str) -> Option<TokenPayload> {
        match decode_token(token, &self.config.secret) {
            Ok(claims) => Some(claims.into()),
            Err(e) => {
                tracing::debug!("Rejected access token: {}", e);
                None
            }
        }
    }

    /// Configured token lifetime in seconds.
    pub fn access_token_expire_secs(&self) -> i64 {
        self.config.access_token_expire_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::Role;

    fn test_service() -> AccessTokenService {
        AccessTokenService::new(AuthConfig::new("test-secret-key", 3600)).unwrap()
    }

    #[test]
    fn test_issue_and_parse() {
        let service = test_service();
        let member = Member::new(42, "ada", "Ada L.", vec![Role::Freelancer]);

        let token = service.issue(&member).unwrap();
        let payload = service.parse(&token).expect("fresh token must parse");

        assert_eq!(payload.id, 42);
        assert_eq!(payload.username, "ada");
        assert_eq!(payload.nickname, "Ada L.");
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        let service = test_service();

        assert!(service.parse("not-a-token").is_none());
        assert!(service.parse("").is_none());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(AccessTokenService::new(AuthConfig::new("", 3600)).is_err());
        assert!(AccessTokenService::new(AuthConfig::new("secret", -1)).is_err());
    }

    #[test]
    fn test_expire_secs_accessor() {
        let service = test_service();
        assert_eq!(service.access_token_expire_secs(), 3600);
    }
}
