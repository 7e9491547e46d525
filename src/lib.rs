// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! RunMate: backend API for a fitness-tracking application.
//!
//! This crate registers and authenticates users, issues session tokens, and
//! serves profiles that aggregate per-user workout records.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{ProfileService, RecordService, TokenService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub token_service: TokenService,
    pub record_service: RecordService,
    pub profile_service: ProfileService,
}
