// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model and the aggregation logic over record sets.
//!
//! Records are written by the session ingestion pipeline and only read here.
//! Aggregation is pure so it can be tested without a database.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::time_utils::parse_duration;

/// Stored workout record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Owning user ID
    pub user_id: String,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Elapsed time in component form, e.g. "1h23m45s"
    pub duration: String,
    /// When the session happened (RFC3339)
    pub recorded_at: String,
}

impl WorkoutRecord {
    /// Parse the stored duration representation.
    ///
    /// Returns zero for a malformed value so one bad row cannot poison the
    /// whole aggregate; the caller logs the occurrence.
    pub fn parsed_duration(&self) -> Duration {
        match parse_duration(&self.duration) {
            Some(d) => d,
            None => {
                tracing::warn!(
                    user_id = %self.user_id,
                    duration = %self.duration,
                    "Unparseable record duration, counting as zero"
                );
                Duration::zero()
            }
        }
    }
}

/// Running totals across a user's record set.
///
/// The empty aggregate is the additive identity, so a user with no records
/// reports zero distance and zero time rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordTotals {
    /// Sum of distances (kilometers)
    pub distance_km: f64,
    /// Sum of parsed durations
    pub duration: Duration,
}

impl Default for RecordTotals {
    fn default() -> Self {
        Self {
            distance_km: 0.0,
            duration: Duration::zero(),
        }
    }
}

impl RecordTotals {
    /// Fold a record into the totals. Order-independent.
    pub fn add(&mut self, record: &WorkoutRecord) {
        self.distance_km += record.distance_km;
        self.duration += record.parsed_duration();
    }

    /// Accumulate totals over a record set.
    pub fn accumulate(records: &[WorkoutRecord]) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.add(record);
        }
        totals
    }
}

/// The record with the maximum distance, or `None` for an empty set.
///
/// Ties keep the earliest record in iteration order.
pub fn best_by_distance(records: &[WorkoutRecord]) -> Option<&WorkoutRecord> {
    records.iter().reduce(|best, candidate| {
        if candidate.distance_km > best.distance_km {
            candidate
        } else {
            best
        }
    })
}
