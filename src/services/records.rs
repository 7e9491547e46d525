// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record aggregation service.
//!
//! Fetches a user's workout records and reduces them to the two derived
//! stats the profile exposes: the best single session and lifetime totals.
//! The reduction itself lives in `models::record` where it is unit-tested.

use chrono::Duration;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::record::{best_by_distance, RecordTotals};

#[derive(Clone)]
pub struct RecordService {
    db: FirestoreDb,
}

impl RecordService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Best single session by distance: (distance_km, elapsed time).
    ///
    /// Fails with `NotFound` when the user has no records; callers decide
    /// whether that is an error or just "no best record yet".
    pub async fn best_record(&self, user_id: &str) -> Result<(f64, Duration)> {
        let records = self.db.list_records(user_id).await?;

        let best = best_by_distance(&records)
            .ok_or_else(|| AppError::NotFound(format!("No records for user {}", user_id)))?;

        Ok((best.distance_km, best.parsed_duration()))
    }

    /// Lifetime totals across all records.
    ///
    /// An empty record set is not an error: the totals are simply zero.
    pub async fn total_record(&self, user_id: &str) -> Result<RecordTotals> {
        let records = self.db.list_records(user_id).await?;

        tracing::debug!(
            user_id,
            record_count = records.len(),
            "Aggregating record totals"
        );

        Ok(RecordTotals::accumulate(&records))
    }
}
