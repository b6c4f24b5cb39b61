#![allow(dead_code)]

pub mod proptest_prelude;

use chat_jwt::{ChatClaims, SecurityConfig};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde_json::Value;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// Decode with the known secret, checking signature, exp and nbf.
pub fn decode_with(token: &str, secret: &str) -> Result<ChatClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;
    validation.set_issuer(&[chat_jwt::ISSUER]);
    validation.set_required_spec_claims(&["exp", "nbf", "iat", "iss", "sub"]);

    decode::<ChatClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
}

/// Decode the payload as raw JSON so absent keys can be observed.
pub fn decode_raw(token: &str) -> Value {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Value>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &validation,
    )
    .unwrap()
    .claims
}

pub fn header_alg(token: &str) -> Algorithm {
    decode_header(token).unwrap().alg
}
