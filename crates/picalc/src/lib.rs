//! PiCalc-rs application library.
//!
//! Exposes the CLI application logic so integration tests can drive it
//! without going through the binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
