//! # picalc-cli
//!
//! Presentation layer for the PiCalc-rs binary: result formatting, the
//! digit file writer, progress and ETA display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress_eta;
pub mod ui;

// Re-exports
pub use presenter::ResultPresenter;
pub use progress_eta::EtaCalculator;
