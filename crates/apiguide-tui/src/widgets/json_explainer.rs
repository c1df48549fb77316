//! Annotated JSON listing with a line cursor
//!
//! The cursor row is highlighted and its note is shown at the right edge
//! of the listing and again underneath it.

use apiguide_core::{Catalog, JsonLine};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::{palette, styles};

use super::stack::{Chunk, Panel};
use super::text::{display_width, wrap, wrapped_lines};

const WHY_JSON: &str = "JSON (JavaScript Object Notation) is the language APIs speak. \
It is lightweight, text-based, and easy for both humans to read and machines to parse.";

pub struct JsonExplainer<'a> {
    catalog: &'a Catalog,
    cursor: usize,
}

impl<'a> JsonExplainer<'a> {
    pub fn new(catalog: &'a Catalog, cursor: usize) -> Self {
        Self { catalog, cursor }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let mut chunks = vec![
            Chunk::Text(vec![Line::styled("Why JSON?", styles::text_bright_bold())]),
            Chunk::Gap(1),
            Chunk::Text(wrapped_lines(WHY_JSON, width, styles::text_secondary())),
        ];

        if !self.catalog.json_facts.is_empty() {
            chunks.push(Chunk::Gap(1));
            chunks.push(Chunk::Text(self.fact_lines(width)));
        }

        if !self.catalog.json_lines.is_empty() {
            let inner = Panel::inner_width(width);
            let listing = self
                .catalog
                .json_lines
                .iter()
                .enumerate()
                .map(|(i, line)| self.listing_line(line, i == self.cursor, inner))
                .collect();

            chunks.push(Chunk::Gap(1));
            chunks.push(Chunk::Panel(
                Panel::new(listing)
                    .title(Line::styled(" payload.json ", styles::text_secondary()))
                    .background(palette::CODE_BG),
            ));
            chunks.push(Chunk::Text(vec![self.note_line()]));
        }

        chunks
    }

    fn fact_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for fact in &self.catalog.json_facts {
            for (i, part) in wrap(fact, width.saturating_sub(2)).into_iter().enumerate() {
                let bullet = if i == 0 { "• " } else { "  " };
                lines.push(Line::from(vec![
                    Span::styled(bullet, styles::accent()),
                    Span::styled(part, styles::text_primary()),
                ]));
            }
        }
        lines
    }

    fn listing_line(&self, line: &JsonLine, selected: bool, width: u16) -> Line<'static> {
        let marker = if selected { "› " } else { "  " };
        let indent = " ".repeat(usize::from(line.indent));
        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::raw(indent.clone()),
            Span::styled(line.text.clone(), styles::tagged(line.color)),
        ];

        if selected {
            if let Some(note) = &line.note {
                let note = format!("// {note}");
                let used = 2 + display_width(&indent) + display_width(&line.text);
                let pad = width
                    .saturating_sub(used)
                    .saturating_sub(display_width(&note))
                    .max(2);
                spans.push(Span::raw(" ".repeat(usize::from(pad))));
                spans.push(Span::styled(
                    note,
                    styles::text_muted().add_modifier(Modifier::ITALIC),
                ));
            }
            return Line::from(spans).style(Style::default().bg(palette::POPUP_BG));
        }

        Line::from(spans)
    }

    fn note_line(&self) -> Line<'static> {
        let total = self.catalog.json_lines.len();
        let position = Span::styled(
            format!(" line {}/{}  ", self.cursor + 1, total),
            styles::text_muted(),
        );
        match self
            .catalog
            .json_lines
            .get(self.cursor)
            .and_then(|l| l.note.as_deref())
        {
            Some(note) => Line::from(vec![
                position,
                Span::styled(note.to_string(), styles::accent_bold()),
            ]),
            None => Line::from(vec![
                position,
                Span::styled("↑/↓ to inspect a line", styles::text_muted()),
            ]),
        }
    }
}
