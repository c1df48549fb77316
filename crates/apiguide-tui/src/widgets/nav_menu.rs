//! Section menu popup
//!
//! Opened with `m`; lists the navigation items with a cursor. Stands in for
//! the collapsed navigation on narrow terminals.

use apiguide_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

use super::modal_overlay;

const MENU_WIDTH: u16 = 36;

pub struct NavMenu {
    cursor: usize,
    current: Section,
    icons: IconSet,
}

impl NavMenu {
    pub fn new(cursor: usize, current: Section, icons: IconSet) -> Self {
        Self {
            cursor,
            current,
            icons,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Section::NAV
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let selected = i == self.cursor;
                let marker = if selected {
                    self.icons.chevron_right()
                } else {
                    " "
                };
                let label = format!("{} {}  {}", marker, i + 1, section.label());
                let style = if selected {
                    styles::focused_selected()
                } else if *section == self.current {
                    styles::accent_bold()
                } else {
                    styles::text_primary()
                };
                Line::styled(label, style)
            })
            .collect();

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("↑↓", styles::keybinding()),
            Span::styled(" move  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" go  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]));
        lines
    }
}

impl Widget for NavMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let lines = self.lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
        let popup = modal_overlay::centered_rect(MENU_WIDTH, height, area);

        modal_overlay::render_shadow(buf, popup);
        modal_overlay::clear_area(buf, popup);

        let block = styles::modal_block(" Sections ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let content = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };
        Paragraph::new(lines).render(content, buf);
    }
}
