//! API Guide Library
//!
//! An interactive terminal guide to API fundamentals. The TUI lives in
//! `apiguide-tui`; this crate adds the headless NDJSON runner.

pub mod headless;

// Re-export main entry points
pub use apiguide_tui::run;
pub use headless::run_headless;
