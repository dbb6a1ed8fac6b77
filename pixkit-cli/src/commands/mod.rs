//! CLI command implementations

pub mod checksum;
pub mod config;
pub mod decode;
pub mod generate;
pub mod key;
