// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ProfileUpdate, ProfileView};
use crate::routes::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use std::sync::Arc;
use validator::Validate;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile/{user_id}", get(get_profile))
        .route("/api/profile", put(update_profile))
}

/// Get a user's profile with derived record stats.
///
/// Any authenticated user may view any profile; only the token's validity is
/// checked, not whether requestor and target match.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>> {
    tracing::debug!(
        requestor = %user.user_id,
        target = %user_id,
        "Fetching profile"
    );

    let view = state.profile_service.get_profile(&user_id).await?;
    Ok(Json(view))
}

/// Update the requesting user's own profile fields.
///
/// Unlike profile reads, the target is always the token subject.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<MessageResponse>> {
    update.validate().map_err(|_| AppError::Validation)?;

    state
        .profile_service
        .update_profile(&user.user_id, &update)
        .await?;

    Ok(Json(MessageResponse {
        message: "Profile updated successfully.".to_string(),
    }))
}
