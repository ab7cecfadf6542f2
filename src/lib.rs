//! sdet-api - a small HTTP service for test-automation exercises
//!
//! The service exposes:
//! - A health/info route advertising the other endpoints
//! - A canned log listing
//! - An OpenAPI document describing both
//!
//! The [`logs`] module also provides the level counter used to tally
//! `[LEVEL]` prefixes in log lines.

pub mod api;
pub mod config;
pub mod error;
pub mod logs;

pub use error::{Error, Result};
pub use logs::{count_entries, count_log_levels, CountPolicy, LevelCounts, LogLevel};
