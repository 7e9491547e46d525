// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile service.
//!
//! Composes the stored user document with derived record stats into the
//! profile read model, and applies partial updates to the mutable profile
//! fields.

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{BestRecordView, ProfileUpdate, ProfileView};
use crate::services::RecordService;

#[derive(Clone)]
pub struct ProfileService {
    db: FirestoreDb,
    records: RecordService,
}

impl ProfileService {
    pub fn new(db: FirestoreDb, records: RecordService) -> Self {
        Self { db, records }
    }

    /// Build the composed profile view for a user.
    ///
    /// Recomputed on every read; nothing here is cached or persisted.
    pub async fn get_profile(&self, user_id: &str) -> Result<ProfileView> {
        let user = self
            .db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        // "No best record yet" is a normal state for a new user, not a failure.
        let best_record = match self.records.best_record(user_id).await {
            Ok((distance, duration)) => BestRecordView {
                distance,
                time: duration.num_seconds(),
            },
            Err(AppError::NotFound(_)) => BestRecordView::default(),
            Err(e) => return Err(e),
        };

        // Totals are mandatory; any failure fails the whole read.
        let totals = self.records.total_record(user_id).await?;

        Ok(ProfileView {
            user_id: user.user_id,
            username: user.username,
            nickname: user.nickname,
            profile_image: user.profile_image,
            weekly_goal: user.weekly_goal,
            total_distance: totals.distance_km,
            total_time: totals.duration.num_seconds(),
            best_record,
        })
    }

    /// Apply a partial update to the user's own profile fields.
    ///
    /// Absent fields are left unchanged; an all-absent update is a successful
    /// no-op. Username, email and password are not reachable here.
    pub async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<()> {
        let mut user = self
            .db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if update.is_empty() {
            return Ok(());
        }

        update.apply(&mut user);
        self.db.upsert_user(&user).await?;

        tracing::info!(user_id, "Profile updated");
        Ok(())
    }
}
