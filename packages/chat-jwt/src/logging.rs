use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns for masking credentials in log output.
pub struct SecretRegexRegistry;

impl SecretRegexRegistry {
    /// Compact JWT: three base64url segments, header starting with `eyJ`
    /// SAFETY: This regex pattern is a vetted literal that compiles successfully
    pub fn jwt() -> &'static Regex {
        static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").unwrap()
        });
        &JWT_REGEX
    }

    /// Opaque token: base64 or base64url run (≥16 chars)
    /// SAFETY: This regex pattern is a vetted literal that compiles successfully
    pub fn opaque_token() -> &'static Regex {
        static OPAQUE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}").unwrap()
        });
        &OPAQUE_TOKEN_REGEX
    }
}

/// Masks signed tokens and long opaque strings.
///
/// JWTs are replaced first so their segments are not matched piecemeal.
pub fn redact(input: &str) -> String {
    let jwt_redacted = SecretRegexRegistry::jwt().replace_all(input, "[REDACTED_JWT]");

    SecretRegexRegistry::opaque_token()
        .replace_all(&jwt_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// Display wrapper that redacts its contents when formatted.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
