//! Access token signing configuration.

use error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable holding the signing secret.
const ENV_SECRET_KEY: &str = "JWT_SECRET_KEY";

/// Environment variable holding the token lifetime in seconds.
const ENV_EXPIRE_SECS: &str = "ACCESS_TOKEN_EXPIRE_SECS";

/// Default token lifetime in seconds.
const DEFAULT_EXPIRE_SECS: i64 = 3600;

/// Signing configuration.
///
/// Loaded once at startup and immutable for the process lifetime; there is
/// no rotation or hot-reload path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token validity duration in seconds
    pub access_token_expire_secs: i64,
}

impl AuthConfig {
    /// Create a new signing configuration.
    pub fn new(secret: impl Into<String>, access_token_expire_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expire_secs,
        }
    }

    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var(ENV_SECRET_KEY).unwrap_or_default();

        let access_token_expire_secs = match std::env::var(ENV_EXPIRE_SECS) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidLifetime(raw.clone()))?,
            Err(_) => DEFAULT_EXPIRE_SECS,
        };

        let config = Self {
            secret,
            access_token_expire_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration, failing fast on unusable values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        if self.access_token_expire_secs <= 0 {
            return Err(ConfigError::InvalidLifetime(
                self.access_token_expire_secs.to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = AuthConfig::new("test-secret-key", 3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let config = AuthConfig::new("", 3600);
        assert!(matches!(config.validate(), Err(ConfigError::MissingSecret)));
    }

    #[test]
    fn test_blank_secret_is_rejected() {
        let config = AuthConfig::new("   ", 3600);
        assert!(matches!(config.validate(), Err(ConfigError::MissingSecret)));
    }

    #[test]
    fn test_non_positive_lifetime_is_rejected() {
        let config = AuthConfig::new("test-secret-key", 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLifetime(_))
        ));

        let config = AuthConfig::new("test-secret-key", -60);
        assert!(config.validate().is_err());
    }
}
