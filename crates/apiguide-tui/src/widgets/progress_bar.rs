//! Thin reading-progress bar above the navigation

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::theme::palette;

pub struct ProgressBar {
    ratio: f64,
}

impl ProgressBar {
    /// `ratio` is clamped to 0.0..=1.0
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: if ratio.is_nan() {
                0.0
            } else {
                ratio.clamp(0.0, 1.0)
            },
        }
    }

    /// Number of filled cells for a bar `width` cells wide
    pub fn filled(&self, width: u16) -> u16 {
        (self.ratio * f64::from(width)).round() as u16
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let filled = self.filled(area.width);
        let y = area.y;

        for (i, x) in (area.left()..area.right()).enumerate() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            if (i as u16) < filled {
                cell.set_char('━')
                    .set_style(Style::default().fg(palette::ACCENT).bg(palette::DEEPEST_BG));
            } else {
                cell.set_char('─')
                    .set_style(Style::default().fg(palette::BORDER_DIM).bg(palette::DEEPEST_BG));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_filled_cells() {
        assert_eq!(ProgressBar::new(0.0).filled(80), 0);
        assert_eq!(ProgressBar::new(0.5).filled(80), 40);
        assert_eq!(ProgressBar::new(1.0).filled(80), 80);
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(ProgressBar::new(2.0).filled(10), 10);
        assert_eq!(ProgressBar::new(-1.0).filled(10), 0);
        assert_eq!(ProgressBar::new(f64::NAN).filled(10), 0);
    }

    #[test]
    fn test_render_half() {
        let mut term = TestTerminal::with_size(10, 1);
        term.render_widget(ProgressBar::new(0.5), term.area());

        assert_eq!(term.cell_at(0, 0), Some("━"));
        assert_eq!(term.cell_at(4, 0), Some("━"));
        assert_eq!(term.cell_at(5, 0), Some("─"));
        assert_eq!(term.buffer()[(0, 0)].fg, palette::ACCENT);
    }
}
