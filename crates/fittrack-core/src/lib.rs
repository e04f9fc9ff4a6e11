//! Shared building blocks for FitTrack services: configuration loading,
//! tracing setup, HTTP middleware and sea-orm / serde helpers.

pub mod config;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
