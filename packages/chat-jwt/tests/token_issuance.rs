//! End-to-end checks on minted chat tokens: decode them with the shared
//! secret and inspect the claims the chat server will see.
//!
//! Run with:
//!   cargo test -p chat-jwt --test token_issuance

mod common;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chat_jwt::{generate_token, mint_chat_token, Gender, Rule, Rules, TOKEN_TTL_SECS};
use common::{decode_raw, decode_with, header_alg, security, TEST_SECRET};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use serde_json::json;

#[test]
fn test_regular_user_has_no_op_claim() {
    let token = generate_token("killer", false, &security()).unwrap();

    let raw = decode_raw(&token);
    assert!(raw.get("op").is_none(), "unexpected op claim: {raw}");

    let claims = decode_with(&token, TEST_SECRET).unwrap();
    assert!(!claims.op);
}

#[test]
fn test_moderator_has_op_true() {
    let token = generate_token("killer", true, &security()).unwrap();

    let raw = decode_raw(&token);
    assert_eq!(raw["op"], json!(true));
}

#[test]
fn test_timestamps() {
    let now = SystemTime::now();
    let token = mint_chat_token("killer", true, now, &security()).unwrap();
    let claims = decode_with(&token, TEST_SECRET).unwrap();

    let expected_iat = now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64;
    assert_eq!(claims.iat, expected_iat);
    assert_eq!(claims.nbf, claims.iat);
    assert_eq!(claims.exp, claims.iat + 12 * 60 * 60);
    assert_eq!(TOKEN_TTL_SECS, 43_200);
}

#[test]
fn test_fixed_display_claims() {
    let token = generate_token("someone-else", false, &security()).unwrap();
    let raw = decode_raw(&token);

    assert_eq!(raw["nick"], json!("killer"));
    assert_eq!(raw["img"], json!("/static/photos/killer.jpg"));
    assert_eq!(raw["url"], json!("/u/killer"));
    assert_eq!(raw["gender"], json!("m"));
    assert_eq!(raw["emoji"], json!("🤖"));
    assert_eq!(raw["rules"], json!(["redcam", "noimage"]));
    assert_eq!(raw["iss"], json!("my own app"));

    let claims = decode_with(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.gender, Gender::Male);
    assert_eq!(claims.rules, Rules::new([Rule::RedCam, Rule::NoImage]));
    assert!(claims.rules.to_dict()["IsRedCamRule"]);
}

#[test]
fn test_header_is_hs256() {
    let token = generate_token("killer", false, &security()).unwrap();
    assert_eq!(header_alg(&token), Algorithm::HS256);
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_wrong_secret_fails_signature() {
    let token = generate_token("killer", true, &security()).unwrap();

    let err = decode_with(&token, "secret-B").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidSignature), "{err:?}");
}

#[test]
fn test_expired_after_twelve_hours() {
    let issued = SystemTime::now() - Duration::from_secs(13 * 60 * 60);
    let token = mint_chat_token("killer", false, issued, &security()).unwrap();

    let err = decode_with(&token, TEST_SECRET).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ExpiredSignature), "{err:?}");
}

#[test]
fn test_username_not_validated() {
    for username in ["", "  spaced  ", "@alice", "ünïcødé 🤖", "a\"quote"] {
        let token = generate_token(username, false, &security()).unwrap();
        let claims = decode_with(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, username);
        assert_eq!(claims.username, username);
    }
}
