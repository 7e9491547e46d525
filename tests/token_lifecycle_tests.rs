// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token lifecycle tests.
//!
//! These tests verify that tokens issued by the token service carry the
//! claims the auth middleware expects, and that the validity window and
//! revocation behave as the login/logout flows rely on.

use chrono::Duration;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use runmate_api::error::AppError;
use runmate_api::services::TokenService;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

/// Claims structure that must match what the middleware expects.
/// This is the canonical format - if either the token service or the
/// middleware changes, this test should catch the incompatibility.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
    iat: usize,
    jti: String,
}

fn unix_now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

#[test]
fn test_issued_token_decodes_with_expected_claims() {
    let service = TokenService::new(SIGNING_KEY, Duration::hours(1200));
    let token = service.issue_session("user-abc").unwrap();

    // Decode with jsonwebtoken directly, like any external verifier would.
    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(token_data.claims.sub, "user-abc");
    assert!(token_data.claims.exp > token_data.claims.iat);
    assert!(!token_data.claims.jti.is_empty());
}

#[test]
fn test_session_lifetime_is_configured_value() {
    let service = TokenService::new(SIGNING_KEY, Duration::hours(1200));
    let token = service.issue_session("user-abc").unwrap();

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    // exp - iat is exactly the configured 1200 hour session policy.
    assert_eq!(
        token_data.claims.exp - token_data.claims.iat,
        1200 * 60 * 60
    );

    // And the expiry lands in the future relative to wall clock.
    let now = unix_now();
    assert!(token_data.claims.exp > now + 1199 * 60 * 60);
}

#[test]
fn test_validate_returns_subject_before_expiry() {
    let service = TokenService::new(SIGNING_KEY, Duration::hours(1));

    for lifetime in [Duration::seconds(30), Duration::hours(5), Duration::days(90)] {
        let token = service.issue("user-xyz", lifetime).unwrap();
        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.sub, "user-xyz");
    }
}

#[test]
fn test_zero_lifetime_token_fails_expired() {
    let service = TokenService::new(SIGNING_KEY, Duration::hours(1));

    let token = service.issue("user-xyz", Duration::zero()).unwrap();

    assert!(matches!(
        service.validate(&token),
        Err(AppError::TokenExpired)
    ));
}

#[test]
fn test_logout_revocation_rejects_presented_token_only() {
    let service = TokenService::new(SIGNING_KEY, Duration::hours(1));

    let first = service.issue_session("user-xyz").unwrap();
    let second = service.issue_session("user-xyz").unwrap();

    let claims = service.validate(&first).unwrap();
    service.revoke(&claims);

    assert!(matches!(
        service.validate(&first),
        Err(AppError::TokenExpired)
    ));
    // The other session stays valid until its own expiry.
    assert!(service.validate(&second).is_ok());
}

#[test]
fn test_token_from_other_key_is_rejected() {
    let service = TokenService::new(SIGNING_KEY, Duration::hours(1));
    let rogue = TokenService::new(b"another_key_entirely_different!!", Duration::hours(1));

    let token = rogue.issue_session("user-xyz").unwrap();

    assert!(matches!(
        service.validate(&token),
        Err(AppError::InvalidToken)
    ));
}
