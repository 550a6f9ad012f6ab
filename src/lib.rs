//! # Alpha Clock
//!
//! A web clock whose numerals are arranged around the dial in alphabetical
//! order of their English names.
//!
//! ## Features
//! - Hand angles computed from alphabetically ranked labels
//! - Per-session timezone preference, in memory or SQLite
//! - JSON polling endpoint for live updates
//! - Health, readiness and liveness probes

/// Label ranking, hand angles and clock snapshots
pub mod clock;
/// Configuration management and environment variables
pub mod config;
/// Error types shared by the core and services
pub mod error;
/// Timezone catalog, preference storage and the clock service
pub mod services;
/// Utility functions for display, validation, and logging
pub mod utils;
/// Routes, session cookies and the application router
pub mod web;
