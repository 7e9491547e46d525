// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error-to-status mapping tests.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use runmate_api::error::AppError;

#[test]
fn test_auth_errors_map_to_401() {
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::InvalidToken.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::TokenExpired.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn test_wrong_password_maps_to_403() {
    assert_eq!(
        AppError::Forbidden.into_response().status(),
        StatusCode::FORBIDDEN
    );
}

#[test]
fn test_duplicate_username_maps_to_409() {
    let err = AppError::Conflict("Username 'runner' is already taken".to_string());
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}

#[test]
fn test_validation_maps_to_400() {
    assert_eq!(
        AppError::Validation.into_response().status(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_internal_failures_map_to_500() {
    let err = AppError::Database("connection refused".to_string());
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    let err = AppError::Internal(anyhow::anyhow!("boom"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
