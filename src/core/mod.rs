//! Service wiring

pub mod http;

pub use http::*;
