// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod profile;
pub mod records;
pub mod token;

pub use profile::ProfileService;
pub use records::RecordService;
pub use token::{Claims, TokenService};
