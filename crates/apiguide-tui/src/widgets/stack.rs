//! Vertical stacking of pre-wrapped content blocks
//!
//! Section bodies are built for a known width as a list of [`Chunk`]s. The
//! stack reports its total height so the renderer can size an offscreen
//! buffer and scroll through it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{palette, styles};

/// Columns between panels sharing a row
pub const COLUMN_GAP: u16 = 2;

/// Width of each column when `width` is split into `columns`
pub fn column_width(width: u16, columns: usize) -> u16 {
    let columns = u16::try_from(columns.max(1)).unwrap_or(1);
    width.saturating_sub(COLUMN_GAP * (columns - 1)) / columns
}

/// How many card columns fit in `width`
pub fn columns_for(width: u16, max: usize) -> usize {
    let fit = if width >= 96 {
        3
    } else if width >= 60 {
        2
    } else {
        1
    };
    fit.min(max.max(1))
}

/// Rounded glass panel around a list of lines
#[derive(Debug, Clone, Default)]
pub struct Panel {
    title: Option<Line<'static>>,
    lines: Vec<Line<'static>>,
    focused: bool,
    border: Option<Color>,
    background: Option<Color>,
}

impl Panel {
    /// Inner width available to a panel drawn `outer` columns wide
    pub fn inner_width(outer: u16) -> u16 {
        outer.saturating_sub(4)
    }

    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<Line<'static>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Rows needed including the border
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

impl Widget for Panel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused)
            .style(Style::default().bg(self.background.unwrap_or(palette::CARD_BG)));
        if let Some(color) = self.border {
            block = block.border_style(Style::default().fg(color));
        }
        if let Some(title) = self.title {
            block = block.title(title);
        }

        let inner = block.inner(area);
        block.render(area, buf);

        // One column of breathing room on each side
        let content = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };
        Paragraph::new(self.lines).render(content, buf);
    }
}

/// One block of a stacked section body
#[derive(Debug, Clone)]
pub enum Chunk {
    /// Bare lines, one row each
    Text(Vec<Line<'static>>),
    /// A full-width panel
    Panel(Panel),
    /// Panels side by side; every panel takes the row's height
    Row { panels: Vec<Panel>, columns: usize },
    /// Empty rows
    Gap(u16),
}

impl Chunk {
    pub fn height(&self) -> u16 {
        match self {
            Chunk::Text(lines) => u16::try_from(lines.len()).unwrap_or(u16::MAX),
            Chunk::Panel(panel) => panel.height(),
            Chunk::Row { panels, .. } => panels.iter().map(Panel::height).max().unwrap_or(0),
            Chunk::Gap(rows) => *rows,
        }
    }
}

/// Lay panels out in rows of `columns`, separated by one blank row
pub fn grid(panels: Vec<Panel>, columns: usize) -> Vec<Chunk> {
    let columns = columns.max(1);
    let mut chunks = Vec::new();
    let mut panels = panels.into_iter().peekable();

    while panels.peek().is_some() {
        if !chunks.is_empty() {
            chunks.push(Chunk::Gap(1));
        }
        let row: Vec<Panel> = panels.by_ref().take(columns).collect();
        chunks.push(Chunk::Row {
            panels: row,
            columns,
        });
    }

    chunks
}

/// Content stacked top to bottom
#[derive(Debug, Clone, Default)]
pub struct Stack {
    chunks: Vec<Chunk>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    pub fn extend(&mut self, chunks: impl IntoIterator<Item = Chunk>) {
        self.chunks.extend(chunks);
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total rows the stack occupies
    pub fn height(&self) -> u16 {
        self.chunks
            .iter()
            .fold(0u16, |acc, c| acc.saturating_add(c.height()))
    }
}

impl Widget for Stack {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;

        for chunk in self.chunks {
            if y >= area.bottom() {
                break;
            }
            let height = chunk.height().min(area.bottom() - y);
            let slot = Rect::new(area.x, y, area.width, height);

            match chunk {
                Chunk::Text(lines) => Paragraph::new(lines).render(slot, buf),
                Chunk::Panel(panel) => panel.render(slot, buf),
                Chunk::Row { panels, columns } => {
                    let width = column_width(area.width, columns);
                    let mut x = area.x;
                    for panel in panels {
                        panel.render(Rect::new(x, y, width, height), buf);
                        x = x.saturating_add(width + COLUMN_GAP);
                    }
                }
                Chunk::Gap(_) => {}
            }

            y = y.saturating_add(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn panel(rows: usize) -> Panel {
        Panel::new((0..rows).map(|i| Line::raw(format!("row {i}"))).collect())
    }

    #[test]
    fn test_column_width_splits_with_gap() {
        assert_eq!(column_width(80, 1), 80);
        assert_eq!(column_width(80, 2), 39);
        assert_eq!(column_width(98, 3), 31);
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for(120, 3), 3);
        assert_eq!(columns_for(70, 3), 2);
        assert_eq!(columns_for(40, 3), 1);
        assert_eq!(columns_for(120, 2), 2);
    }

    #[test]
    fn test_panel_height_includes_border() {
        assert_eq!(panel(3).height(), 5);
        assert_eq!(panel(0).height(), 2);
    }

    #[test]
    fn test_row_height_is_tallest_panel() {
        let row = Chunk::Row {
            panels: vec![panel(1), panel(4)],
            columns: 2,
        };
        assert_eq!(row.height(), 6);
    }

    #[test]
    fn test_grid_rows_and_gaps() {
        let chunks = grid(vec![panel(1), panel(1), panel(1)], 2);
        // row, gap, row
        assert_eq!(chunks.len(), 3);
        assert!(matches!(chunks[1], Chunk::Gap(1)));
        assert_eq!(chunks.iter().map(Chunk::height).sum::<u16>(), 3 + 1 + 3);
    }

    #[test]
    fn test_grid_of_nothing_is_empty() {
        assert!(grid(Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_stack_height_sums_chunks() {
        let mut stack = Stack::new();
        stack.push(Chunk::Text(vec![Line::raw("a"), Line::raw("b")]));
        stack.push(Chunk::Gap(1));
        stack.push(Chunk::Panel(panel(2)));
        assert_eq!(stack.height(), 2 + 1 + 4);
    }

    #[test]
    fn test_stack_renders_in_order() {
        let mut term = TestTerminal::with_size(30, 10);
        let mut stack = Stack::new();
        stack.push(Chunk::Text(vec![Line::raw("heading")]));
        stack.push(Chunk::Panel(panel(1).title(" box ")));

        term.render_widget(stack, term.area());

        assert!(term.line_contains(0, "heading"));
        assert!(term.line_contains(1, "box"));
        assert!(term.line_contains(2, "row 0"));
    }

    #[test]
    fn test_stack_clips_to_area() {
        let mut term = TestTerminal::with_size(20, 2);
        let mut stack = Stack::new();
        stack.push(Chunk::Panel(panel(5)));
        // Must not panic when taller than the area
        term.render_widget(stack, term.area());
    }
}
