//! Centralized theme system for the guide's dark glass look.
//!
//! This module provides:
//! - `palette` - Raw color constants and catalog color-tag mapping
//! - `styles` - Semantic style builder functions
//! - `icons` - Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
