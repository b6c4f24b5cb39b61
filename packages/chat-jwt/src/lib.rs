//! Chat login token issuance.
//!
//! Mints HS256 JWTs carrying a username, fixed display profile, moderation
//! rules and an optional operator flag, for the chat server's `?jwt=` login.

pub mod error;
pub mod jwt;
pub mod logging;
pub mod profile;
pub mod rules;
pub mod security_config;
pub mod settings;

pub use error::TokenError;
pub use jwt::{
    generate_token, login_url, mint_chat_token, ChatClaims, DEFAULT_BASE_URL, ISSUER,
    TOKEN_TTL_SECS,
};
pub use profile::{ChatProfile, Gender};
pub use rules::{Rule, Rules};
pub use security_config::{SecretSource, SecurityConfig, SECRET_ENV_VAR};
pub use settings::{Settings, DEFAULT_SETTINGS_PATH};
