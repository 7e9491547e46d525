// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod profile;
pub mod record;
pub mod user;

pub use profile::{BestRecordView, ProfileView};
pub use record::{RecordTotals, WorkoutRecord};
pub use user::{Credential, ProfileUpdate, User};
