//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use apiguide_app::config::IconMode;
use apiguide_core::IconRef;

/// Braille spinner shared by both icon modes
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a catalog icon reference
    pub fn icon(&self, icon: IconRef) -> &'static str {
        match (self.mode, icon) {
            (IconMode::NerdFonts, IconRef::Globe) => "\u{f0ac}", // nf-fa-globe
            (IconMode::NerdFonts, IconRef::Database) => "\u{f1c0}", // nf-fa-database
            (IconMode::NerdFonts, IconRef::Zap) => "\u{f0e7}",   // nf-fa-bolt
            (IconMode::NerdFonts, IconRef::Server) => "\u{f233}", // nf-fa-server
            (IconMode::NerdFonts, IconRef::Layers) => "\u{f5fd}", // nf-fa-layer_group
            (IconMode::NerdFonts, IconRef::Refresh) => "\u{f021}", // nf-fa-refresh
            (IconMode::NerdFonts, IconRef::Shield) => "\u{f132}", // nf-fa-shield
            (IconMode::NerdFonts, IconRef::Link) => "\u{f0c1}",  // nf-fa-link
            (IconMode::NerdFonts, IconRef::FileJson) => "\u{f0626}", // nf-md-code_json
            (IconMode::NerdFonts, IconRef::Check) => "\u{f00c}", // nf-fa-check
            (IconMode::NerdFonts, IconRef::Alert) => "\u{f071}", // nf-fa-warning
            (IconMode::NerdFonts, IconRef::Lock) => "\u{f023}",  // nf-fa-lock
            (IconMode::NerdFonts, IconRef::Search) => "\u{f002}", // nf-fa-search
            (IconMode::NerdFonts, IconRef::Offline) => "\u{f05aa}", // nf-md-wifi_off
            (IconMode::Unicode, IconRef::Globe) => "[W]",
            (IconMode::Unicode, IconRef::Database) => "[D]",
            (IconMode::Unicode, IconRef::Zap) => "\u{03df}", // ϟ
            (IconMode::Unicode, IconRef::Server) => "[S]",
            (IconMode::Unicode, IconRef::Layers) => "\u{2261}", // ≡
            (IconMode::Unicode, IconRef::Refresh) => "\u{21bb}", // ↻
            (IconMode::Unicode, IconRef::Shield) => "[#]",
            (IconMode::Unicode, IconRef::Link) => "\u{221e}", // ∞
            (IconMode::Unicode, IconRef::FileJson) => "{}",
            (IconMode::Unicode, IconRef::Check) => "\u{2713}", // ✓
            (IconMode::Unicode, IconRef::Alert) => "\u{26a0}", // ⚠
            (IconMode::Unicode, IconRef::Lock) => "[L]",
            (IconMode::Unicode, IconRef::Search) => "[?]",
            (IconMode::Unicode, IconRef::Offline) => "[x]",
        }
    }

    /// Brand mark in the navigation bar
    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c9}", // nf-fa-bars
            IconMode::Unicode => "\u{2630}",   // ☰
        }
    }

    pub fn play(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f04b}", // nf-fa-play
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn arrow_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f061}", // nf-fa-arrow_right
            IconMode::Unicode => "\u{2192}",   // →
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn checkbox(&self, checked: bool) -> &'static str {
        match (self.mode, checked) {
            (IconMode::NerdFonts, true) => "\u{f14a}", // nf-fa-check_square
            (IconMode::NerdFonts, false) => "\u{f096}", // nf-fa-square_o
            (IconMode::Unicode, true) => "[x]",
            (IconMode::Unicode, false) => "[ ]",
        }
    }

    /// Spinner glyph for an animation frame
    pub fn spinner(&self, frame: u64) -> &'static str {
        SPINNER_FRAMES[(frame % SPINNER_FRAMES.len() as u64) as usize]
    }
}
