use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Settings error: {detail}")]
    Settings { detail: String },
    #[error("Failed to encode JWT: {detail}")]
    Encode { detail: String },
    #[error("Clock error: {detail}")]
    Clock { detail: String },
}

impl TokenError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn settings(detail: impl Into<String>) -> Self {
        Self::Settings {
            detail: detail.into(),
        }
    }

    pub fn encode(detail: impl Into<String>) -> Self {
        Self::Encode {
            detail: detail.into(),
        }
    }

    pub fn clock(detail: impl Into<String>) -> Self {
        Self::Clock {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for the error variant
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Config { .. } => "CONFIG_ERROR",
            TokenError::Settings { .. } => "SETTINGS_ERROR",
            TokenError::Encode { .. } => "ENCODE_ERROR",
            TokenError::Clock { .. } => "CLOCK_ERROR",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        TokenError::encode(e.to_string())
    }
}
