//! Configuration file parsing for the API Guide
//!
//! Supports `<config_dir>/apiguide/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_settings_path, load_settings, resolve_settings};
pub use types::*;
