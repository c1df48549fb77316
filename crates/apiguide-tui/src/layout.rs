//! Screen layout definitions for the TUI
//!
//! The screen is a stack of fixed rows around a scrollable body: the
//! optional progress bar, the navigation bar, the section body and the
//! key hints.

use ratatui::layout::{Constraint, Layout, Rect};

/// Horizontal padding between the body edge and section content
pub const BODY_PADDING: u16 = 2;


/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Scroll progress row (zero height when hidden)
    pub progress: Rect,

    /// Navigation bar (glass container)
    pub nav: Rect,

    /// Scrollable section content, already padded
    pub body: Rect,

    /// Key hint row
    pub hints: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_progress` - Reserve a row for the scroll progress bar
pub fn create(area: Rect, show_progress: bool) -> ScreenAreas {
    let constraints = [
        Constraint::Length(u16::from(show_progress)), // Progress bar
        Constraint::Length(3),                        // Nav bar (top border + row + bottom border)
        Constraint::Min(1),                           // Body
        Constraint::Length(1),                        // Hints
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        progress: chunks[0],
        nav: chunks[1],
        body: pad_horizontal(chunks[2], BODY_PADDING),
        hints: chunks[3],
    }
}

/// Shrink a rect by `padding` columns on both sides
pub fn pad_horizontal(area: Rect, padding: u16) -> Rect {
    if area.width <= padding * 2 {
        return area;
    }
    Rect {
        x: area.x + padding,
        width: area.width - padding * 2,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_with_progress() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.progress.height, 1);
        assert_eq!(layout.nav.height, 3);
        assert_eq!(layout.nav.y, 1);
        assert_eq!(layout.body.y, 4);
        assert_eq!(layout.body.height, 19); // 24 - 1 - 3 - 1
        assert_eq!(layout.hints.y, 23);
    }

    #[test]
    fn test_create_layout_without_progress() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.progress.height, 0);
        assert_eq!(layout.nav.y, 0);
        assert_eq!(layout.body.height, 20);
    }

    #[test]
    fn test_body_is_padded() {
        let layout = create(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.body.x, BODY_PADDING);
        assert_eq!(layout.body.width, 80 - BODY_PADDING * 2);
    }

    #[test]
    fn test_pad_horizontal_keeps_tiny_areas() {
        let area = Rect::new(0, 0, 3, 5);
        assert_eq!(pad_horizontal(area, 2), area);
    }
}
