use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TokenError;
use crate::logging::Redacted;
use crate::profile::{ChatProfile, Gender};
use crate::rules::Rules;
use crate::security_config::SecurityConfig;

/// Issuer stamped on every token
pub const ISSUER: &str = "my own app";

/// Token lifetime: 12 hours
pub const TOKEN_TTL_SECS: i64 = 12 * 60 * 60;

/// Claims included in chat login tokens, in payload order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatClaims {
    /// Username (subject)
    pub sub: String,
    /// Same as `sub`; the chat front-end reads this one
    pub username: String,
    pub nick: String,
    pub img: String,
    pub url: String,
    pub gender: Gender,
    pub emoji: String,
    pub rules: Rules,
    pub iss: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Not-before (seconds since epoch)
    pub nbf: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Operator/moderator; omitted from the payload unless set
    #[serde(default, skip_serializing_if = "is_false")]
    pub op: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ChatClaims {
    /// Build the claim set for `username` issued at `iat`.
    ///
    /// Fails when `iat + TOKEN_TTL_SECS` does not fit in an `i64`.
    pub fn new(
        username: &str,
        is_op: bool,
        iat: i64,
        profile: &ChatProfile,
    ) -> Result<Self, TokenError> {
        let exp = iat
            .checked_add(TOKEN_TTL_SECS)
            .ok_or_else(|| TokenError::clock("token expiry overflows"))?;

        Ok(Self {
            sub: username.to_string(),
            username: username.to_string(),
            nick: profile.nick.clone(),
            img: profile.img.clone(),
            url: profile.url.clone(),
            gender: profile.gender,
            emoji: profile.emoji.clone(),
            rules: profile.rules.clone(),
            iss: ISSUER.to_string(),
            iat,
            nbf: iat,
            exp,
            op: is_op,
        })
    }
}

/// Mint a HS256 chat token with a 12-hour TTL.
pub fn mint_chat_token(
    username: &str,
    is_op: bool,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::clock("system time is before the Unix epoch"))?
        .as_secs();
    let iat = i64::try_from(secs).map_err(|_| TokenError::clock("system time out of range"))?;

    let claims = ChatClaims::new(username, is_op, iat, &ChatProfile::default())?;

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )?;

    debug!(
        sub = %claims.sub,
        op = claims.op,
        exp = claims.exp,
        token = %Redacted(&token),
        "minted chat token"
    );

    Ok(token)
}

/// Default chat server entry page
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/";

/// Append `token` to `base_url` as the `jwt` query parameter.
pub fn login_url(base_url: &str, token: &str) -> String {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{sep}jwt={token}")
}

/// Mint a chat token issued at the current time.
pub fn generate_token(
    username: &str,
    is_op: bool,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    mint_chat_token(username, is_op, SystemTime::now(), security)
}
