//! Bottom key hint row

use apiguide_app::UiMode;
use apiguide_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub struct HintsBar {
    section: Section,
    mode: UiMode,
}

impl HintsBar {
    pub fn new(section: Section, mode: UiMode) -> Self {
        Self { section, mode }
    }

    /// Key/description pairs for the current context, most specific first
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.mode == UiMode::Menu {
            return vec![("↑↓", "move"), ("Enter", "go"), ("Esc", "close"), ("q", "quit")];
        }

        let mut hints = match self.section {
            Section::Intro => vec![("Enter", "start"), ("t", "simulator")],
            Section::Rest => vec![
                ("←→", "method"),
                ("s", "send"),
                ("r", "resource"),
                ("i", "id"),
                ("f", "query"),
            ],
            Section::Json => vec![("↑↓", "inspect")],
            Section::Status => vec![("↑↓", "scenario"), ("Enter", "trigger")],
            Section::Types | Section::BestPractices | Section::OpenApi => Vec::new(),
        };
        hints.extend([
            ("Tab", "next"),
            ("m", "menu"),
            ("j/k", "scroll"),
            ("q", "quit"),
        ]);
        hints
    }
}

impl Widget for HintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {desc}"), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_rest_hints_come_first() {
        let hints = HintsBar::new(Section::Rest, UiMode::Normal).hints();
        assert_eq!(hints[0], ("←→", "method"));
        assert_eq!(hints.last(), Some(&("q", "quit")));
    }

    #[test]
    fn test_types_has_only_global_hints() {
        let hints = HintsBar::new(Section::Types, UiMode::Normal).hints();
        assert_eq!(hints[0], ("Tab", "next"));
    }

    #[test]
    fn test_menu_mode_hints() {
        let hints = HintsBar::new(Section::Rest, UiMode::Menu).hints();
        assert_eq!(hints[0], ("↑↓", "move"));
        assert!(!hints.contains(&("s", "send")));
    }

    #[test]
    fn test_render_status_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(
            HintsBar::new(Section::Status, UiMode::Normal),
            term.area(),
        );
        assert!(term.buffer_contains("Enter trigger"));
        assert!(term.buffer_contains("q quit"));
    }
}
