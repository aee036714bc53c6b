//! Points scoring and visa eligibility for Australian skilled migration.

pub mod config;
pub mod error;
pub mod points;
pub mod telemetry;
