//! Configuration types for the API Guide
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - Related sub-types and enums

use std::time::Duration;

use apiguide_core::Section;
use serde::{Deserialize, Serialize};

/// Default fake latency of the REST simulator
pub const DEFAULT_REST_DELAY_MS: u64 = 800;
/// Default fake latency of the status lab
pub const DEFAULT_STATUS_DELAY_MS: u64 = 600;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub labs: LabSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Section shown at startup
    #[serde(default)]
    pub start_section: Section,
}

/// Simulated latency of the labs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LabSettings {
    #[serde(default = "default_rest_delay_ms")]
    pub rest_delay_ms: u64,

    #[serde(default = "default_status_delay_ms")]
    pub status_delay_ms: u64,
}

impl Default for LabSettings {
    fn default() -> Self {
        Self {
            rest_delay_ms: DEFAULT_REST_DELAY_MS,
            status_delay_ms: DEFAULT_STATUS_DELAY_MS,
        }
    }
}

impl LabSettings {
    pub fn rest_delay(&self) -> Duration {
        Duration::from_millis(self.rest_delay_ms)
    }

    pub fn status_delay(&self) -> Duration {
        Duration::from_millis(self.status_delay_ms)
    }
}

fn default_rest_delay_ms() -> u64 {
    DEFAULT_REST_DELAY_MS
}

fn default_status_delay_ms() -> u64 {
    DEFAULT_STATUS_DELAY_MS
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font) or
/// safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Show the scroll-progress bar above the navigation
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_progress: true,
        }
    }
}
