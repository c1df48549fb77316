//! Color palette for the guide.
//!
//! RGB values follow the slate/blue scheme of the web version; catalog
//! content refers to colors symbolically through `ColorTag`.

use apiguide_core::ColorTag;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(2, 6, 23); // slate-950
pub const CARD_BG: Color = Color::Rgb(15, 23, 42); // slate-900
pub const POPUP_BG: Color = Color::Rgb(30, 41, 59); // slate-800
pub const CODE_BG: Color = Color::Rgb(10, 14, 30);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85); // slate-700
pub const BORDER_ACTIVE: Color = Color::Rgb(96, 165, 250); // blue-400

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(96, 165, 250);
pub const ACCENT_ALT: Color = Color::Rgb(192, 132, 252); // purple-400

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240); // slate-200
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // slate-400
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500
pub const TEXT_BRIGHT: Color = Color::White;

/// Text drawn on top of an accent background
pub const CONTRAST_FG: Color = Color::Rgb(2, 6, 23);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(74, 222, 128);
pub const STATUS_RED: Color = Color::Rgb(248, 113, 113);
pub const STATUS_YELLOW: Color = Color::Rgb(250, 204, 21);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(0, 0, 0);

/// Resolve a catalog color tag to a terminal color
pub fn color_for(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Rgb(96, 165, 250),
        ColorTag::Pink => Color::Rgb(244, 114, 182),
        ColorTag::Yellow => Color::Rgb(250, 204, 21),
        ColorTag::Green => Color::Rgb(74, 222, 128),
        ColorTag::Gray => Color::Rgb(156, 163, 175),
        ColorTag::Orange => Color::Rgb(251, 146, 60),
        ColorTag::Red => Color::Rgb(248, 113, 113),
        ColorTag::Purple => Color::Rgb(192, 132, 252),
        ColorTag::Rose => Color::Rgb(251, 113, 133),
        ColorTag::Slate => Color::Rgb(148, 163, 184),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_maps_to_rgb() {
        for tag in [
            ColorTag::Blue,
            ColorTag::Pink,
            ColorTag::Yellow,
            ColorTag::Green,
            ColorTag::Gray,
            ColorTag::Orange,
            ColorTag::Red,
            ColorTag::Purple,
            ColorTag::Rose,
            ColorTag::Slate,
        ] {
            assert!(matches!(color_for(tag), Color::Rgb(_, _, _)), "{tag:?}");
        }
    }

    #[test]
    fn test_status_tags_match_status_colors() {
        assert_eq!(color_for(ColorTag::Green), STATUS_GREEN);
        assert_eq!(color_for(ColorTag::Red), STATUS_RED);
        assert_eq!(color_for(ColorTag::Yellow), STATUS_YELLOW);
    }
}
