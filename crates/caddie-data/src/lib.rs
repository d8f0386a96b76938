//! Data ingestion layer for the caddie dashboard.
//!
//! Responsible for discovering and validating launch-monitor CSV exports,
//! holding the resulting shots in a per-session repository, and deriving the
//! per-club gapping aggregates consumed by the UI layer.

pub mod aggregator;
pub mod reader;
pub mod repository;
pub mod session;

pub use caddie_core as core;
