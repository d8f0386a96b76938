//! Core domain types for the caddie launch-monitor dashboard.
//!
//! Holds the shot data model, the CSV schema contract, the error taxonomy,
//! display formatting helpers, and CLI/persisted settings shared by the
//! ingestion and UI layers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod schema;
pub mod settings;
