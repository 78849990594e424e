//! Metrics engine: pure functions over daily record histories.
//!
//! Inputs may arrive in any order; every windowed computation sorts
//! chronologically first.

pub mod dashboard;
pub mod moving_average;
pub mod scoring;
pub mod series;
pub mod summary;
pub mod weekly;

pub use dashboard::*;
pub use moving_average::*;
pub use scoring::*;
pub use series::*;
pub use summary::*;
pub use weekly::*;
