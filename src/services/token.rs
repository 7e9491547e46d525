// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token service.
//!
//! Issues and validates signed, time-bounded JWTs carrying a user identity.
//! Tokens are stateless: nothing is persisted per token, and validation needs
//! only the process-wide signing key. Logout is handled by an in-process
//! revocation set keyed by the token's `jti`, with entries living no longer
//! than the token they revoke.

use chrono::{Duration, Utc};
use dashmap::DashMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppError;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Token ID, the key into the revocation set
    pub jti: String,
}

/// Issues and validates session tokens with a process-wide signing key.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_lifetime: Duration,
    /// Revoked token IDs mapped to their own expiry timestamp.
    revoked: Arc<DashMap<String, i64>>,
}

impl TokenService {
    /// Build the service from the signing key loaded at startup.
    pub fn new(signing_key: &[u8], default_lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            default_lifetime,
            revoked: Arc::new(DashMap::new()),
        }
    }

    /// Issue a token for `subject` with the configured session lifetime.
    pub fn issue_session(&self, subject: &str) -> Result<String, AppError> {
        self.issue(subject, self.default_lifetime)
    }

    /// Issue a token for `subject` valid for `lifetime` from now.
    ///
    /// A zero (or negative) lifetime produces a structurally valid token that
    /// is already expired at any later validation.
    pub fn issue(&self, subject: &str, lifetime: Duration) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let exp = now + lifetime.num_seconds().max(0);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now as usize,
            exp: exp as usize,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT encoding failed: {}", e)))
    }

    /// Validate a token and return its claims.
    ///
    /// Fails with `InvalidToken` on a bad signature or shape, and with
    /// `TokenExpired` once the validity window closes or the token has been
    /// revoked.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked manually below: the window is iat <= now < exp,
        // with no leeway, so a zero-lifetime token is expired at issuance.
        validation.validate_exp = false;
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?;
        let claims = token_data.claims;

        let now = Utc::now().timestamp();
        if now >= claims.exp as i64 {
            return Err(AppError::TokenExpired);
        }

        // A revoked session reads exactly like an expired one.
        if self.revoked.contains_key(&claims.jti) {
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }

    /// Revoke a validated token so later `validate` calls reject it.
    ///
    /// Entries for tokens that have since expired on their own are pruned
    /// here, bounding the set by the number of live revoked sessions.
    pub fn revoke(&self, claims: &Claims) {
        let now = Utc::now().timestamp();
        self.revoked.retain(|_, exp| *exp > now);
        self.revoked.insert(claims.jti.clone(), claims.exp as i64);
    }
}
