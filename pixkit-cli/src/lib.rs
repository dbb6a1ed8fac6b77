//! Pixkit CLI library surface.
//!
//! Exposes the command handlers so integration tests can drive them
//! without spawning the binary.

pub mod commands;
pub mod config;
pub mod ui;
