//! Top navigation bar
//!
//! Brand on the left, one tab per navigation item on the right. When the
//! tabs do not fit, they collapse into a menu button.

use apiguide_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

use super::text::display_width;

const BRAND: &str = "API Guide";

pub struct NavBar {
    current: Section,
    icons: IconSet,
}

impl NavBar {
    pub fn new(current: Section, icons: IconSet) -> Self {
        Self { current, icons }
    }

    fn brand(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{} ", self.icons.terminal()), styles::accent()),
            Span::styled(BRAND, styles::text_bright_bold()),
        ])
    }

    fn tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, section) in Section::NAV.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if *section == self.current {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(
                format!(" {} {} ", i + 1, section.label()),
                style,
            ));
        }
        Line::from(spans)
    }

    fn menu_button(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{} ", self.icons.menu()), styles::accent()),
            Span::styled("m", styles::keybinding()),
            Span::styled(" Menu", styles::text_secondary()),
        ])
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let row = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            height: 1,
            ..inner
        };

        let brand = self.brand();
        let brand_width = u16::try_from(brand.width()).unwrap_or(u16::MAX);
        buf.set_line(row.x, row.y, &brand, row.width);

        let tabs = self.tabs();
        let tabs_width = u16::try_from(tabs.width()).unwrap_or(u16::MAX);
        let right = if brand_width + 2 + tabs_width <= row.width {
            tabs
        } else {
            self.menu_button()
        };

        let right_width = display_width(&right.to_string());
        if right_width < row.width {
            let x = row.x + row.width - right_width;
            buf.set_line(x, row.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use apiguide_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_wide_bar_shows_all_tabs() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(NavBar::new(Section::Rest, icons()), term.area());

        assert!(term.buffer_contains("API Guide"));
        for section in Section::NAV {
            assert!(term.buffer_contains(section.label()), "{section}");
        }
        assert!(term.buffer_contains("3 REST Lab"));
    }

    #[test]
    fn test_narrow_bar_collapses_to_menu_button() {
        let mut term = TestTerminal::new();
        term.render_widget(NavBar::new(Section::Rest, icons()), term.area());

        assert!(term.buffer_contains("API Guide"));
        assert!(term.buffer_contains("m Menu"));
        assert!(!term.buffer_contains("Best Practices"));
    }

    #[test]
    fn test_current_tab_is_highlighted() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(NavBar::new(Section::Json, icons()), term.area());

        let content = term.content();
        let row = content.lines().nth(1).expect("tab row");
        let col = row.find("4 Data (JSON)").expect("json tab");
        let x = u16::try_from(row[..col].chars().count()).expect("column");
        assert_eq!(term.buffer()[(x, 1)].bg, palette::ACCENT);
    }

    #[test]
    fn test_openapi_highlights_no_tab() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(NavBar::new(Section::OpenApi, icons()), term.area());

        let highlighted = (0..120u16).any(|x| term.buffer()[(x, 1)].bg == palette::ACCENT);
        assert!(!highlighted);
    }
}
