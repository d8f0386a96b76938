//! Terminal UI layer for the caddie dashboard.
//!
//! Provides themes, the dashboard header, the dispersion scatter, gapping
//! bars and shot table views, and the main application event loop built on
//! top of [`ratatui`].

pub mod app;
pub mod components;
pub mod dispersion_view;
pub mod gapping_view;
pub mod table_view;
pub mod themes;

pub use caddie_core as core;
