use std::path::Path;

use jsonwebtoken::Algorithm;
use tracing::info;

use crate::error::TokenError;
use crate::settings::Settings;

/// Environment variable consulted for the signing secret
pub const SECRET_ENV_VAR: &str = "CHAT_JWT_SECRET";

/// Where the signing secret was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Argument,
    Environment,
    SettingsFile,
}

/// Configuration for JWT signing
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared HMAC secret; must match the chat server's `[JWT] SecretKey`
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (always HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Resolve the signing secret from the first source that provides one:
    /// explicit argument, then `CHAT_JWT_SECRET`, then the settings file.
    pub fn resolve(
        explicit: Option<&str>,
        settings_path: impl AsRef<Path>,
    ) -> Result<(Self, SecretSource), TokenError> {
        if let Some(secret) = explicit {
            return Self::non_empty(secret).map(|c| (c, SecretSource::Argument));
        }

        if let Ok(secret) = std::env::var(SECRET_ENV_VAR) {
            return Self::non_empty(&secret).map(|c| (c, SecretSource::Environment));
        }

        let settings_path = settings_path.as_ref();
        if let Some(settings) = Settings::from_file(settings_path)? {
            if let Some(secret) = settings.secret_key() {
                info!(path = %settings_path.display(), "using JWT secret from settings file");
                return Ok((Self::new(secret.as_bytes()), SecretSource::SettingsFile));
            }
        }

        Err(TokenError::config(format!(
            "no JWT secret: pass --secret, set {SECRET_ENV_VAR}, or set [JWT] SecretKey in {}",
            settings_path.display()
        )))
    }

    fn non_empty(secret: &str) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::config("JWT secret must not be empty"));
        }
        Ok(Self::new(secret.as_bytes()))
    }
}
