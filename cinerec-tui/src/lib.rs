//! Cinerec TUI library exports.

pub mod api_client;
pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod state;
pub mod telemetry;
pub mod theme;
pub mod views;
