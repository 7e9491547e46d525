// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Composed profile read model.
//!
//! Never persisted; recomputed from the user document and the record set on
//! every profile read.

use serde::Serialize;

/// Best single workout, reported with time in whole seconds.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BestRecordView {
    /// Distance in kilometers
    pub distance: f64,
    /// Elapsed time in seconds
    pub time: i64,
}

/// Profile response: public user fields plus derived record stats.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub user_id: String,
    pub username: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub weekly_goal: Option<String>,
    /// Lifetime distance in kilometers
    pub total_distance: f64,
    /// Lifetime workout time in seconds
    pub total_time: i64,
    pub best_record: BestRecordView,
}
