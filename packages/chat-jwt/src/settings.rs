//! Reader for the chat server's `settings.toml`.
//!
//! Only the `[JWT]` table matters here; every other section of the server's
//! settings file is ignored.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::TokenError;

pub const DEFAULT_SETTINGS_PATH: &str = "./settings.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(rename = "JWT", default)]
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JwtSettings {
    pub enabled: bool,
    pub strict: bool,
    pub secret_key: String,
    #[serde(rename = "LandingPageURL")]
    pub landing_page_url: String,
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist so callers can fall
    /// through to other secret sources.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Option<Self>, TokenError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "settings file not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(TokenError::settings(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        Self::parse(&contents)
            .map(Some)
            .map_err(|e| TokenError::settings(format!("{}: {e}", path.display())))
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The configured JWT secret, if any non-blank value is set.
    pub fn secret_key(&self) -> Option<&str> {
        let key = self.jwt.secret_key.as_str();
        (!key.trim().is_empty()).then_some(key)
    }
}
