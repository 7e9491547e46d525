// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup, login and logout routes.

use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::routes::MessageResponse;
use crate::services::Claims;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

/// Public auth routes (no token required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Auth routes that require a valid session token.
/// The auth middleware is applied in routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/logout", post(logout))
}

/// Signup request body.
#[derive(Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 64))]
    pub nickname: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for signup and login: the new session plus its owner.
#[derive(Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user_id: String,
    pub token: String,
}

/// Register a new user and open their first session.
///
/// A duplicate username fails with 409 before any token is issued.
async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AuthResponse>> {
    // Field-level validation detail stays out of the response.
    req.validate().map_err(|_| AppError::Validation)?;

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?;

    let user = User {
        user_id: uuid::Uuid::new_v4().to_string(),
        username: req.username,
        email: req.email,
        nickname: req.nickname,
        profile_image: None,
        weekly_goal: None,
        created_at: format_utc_rfc3339(chrono::Utc::now()),
    };

    state.db.create_user(&user, &password_hash).await?;

    let token = state.token_service.issue_session(&user.user_id)?;

    tracing::info!(user_id = %user.user_id, username = %user.username, "User signed up");

    Ok(Json(AuthResponse {
        message: "Signup successful".to_string(),
        user_id: user.user_id,
        token,
    }))
}

/// Exchange credentials for a session token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    // Unknown usernames surface as 401 so login cannot confirm whether an
    // account exists.
    let credential = state
        .db
        .get_credential(&req.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let password_ok = bcrypt::verify(&req.password, &credential.password_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password verification failed: {}", e)))?;

    if !password_ok {
        tracing::warn!(username = %req.username, "Login attempt with wrong password");
        return Err(AppError::Forbidden);
    }

    let token = state.token_service.issue_session(&credential.user_id)?;

    tracing::info!(user_id = %credential.user_id, "User logged in");

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user_id: credential.user_id,
        token,
    }))
}

/// Revoke the presented session token.
///
/// Other outstanding sessions for the same user remain valid until their own
/// expiry.
async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Json<MessageResponse> {
    state.token_service.revoke(&claims);

    tracing::info!(user_id = %claims.sub, "Session revoked");

    Json(MessageResponse {
        message: "Logout successful".to_string(),
    })
}
