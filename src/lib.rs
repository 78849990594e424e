//! Fitness dashboard backend: daily health records, goals, and the
//! derived-metrics and feedback engine that scores them.

pub mod analytics;
pub mod common;
pub mod config;
pub mod core;
pub mod db;
pub mod feedback;
pub mod goals;
pub mod logging;
pub mod metrics;
pub mod models;
