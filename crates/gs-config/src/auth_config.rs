use crate::{ConfigError, ConfigErrorResult, MIN_JWT_SECRET_LEN};

use serde::Deserialize;

/// Identity-provider verification settings. Exactly one of `jwt_secret`
/// (HS256) or `jwt_public_key_path` (RS256) must be configured; every
/// endpoint requires a verifiable credential.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    /// Path to an RS256 public key PEM, relative to the config directory.
    pub jwt_public_key_path: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "one of auth.jwt_secret or auth.jwt_public_key_path is required",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            (Some(secret), None) if secret.len() < MIN_JWT_SECRET_LEN => Err(ConfigError::auth(
                format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LEN
                ),
            )),
            _ => Ok(()),
        }
    }
}
