//! Design & security practices and the authentication headers panel

use apiguide_core::{BestPractice, ColorTag, IconRef};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, palette, styles};

use super::stack::{Chunk, Panel};
use super::text::{wrap, wrapped_lines};

const PRACTICE_INDENT: u16 = 4;

pub struct BestPracticesList<'a> {
    practices: &'a [BestPractice],
    icons: IconSet,
}

impl<'a> BestPracticesList<'a> {
    pub fn new(practices: &'a [BestPractice], icons: IconSet) -> Self {
        Self { practices, icons }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let pad = " ".repeat(usize::from(PRACTICE_INDENT));

        for practice in self.practices {
            if !chunks.is_empty() {
                chunks.push(Chunk::Gap(1));
            }
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:<width$}", self.icons.icon(practice.icon), width = usize::from(PRACTICE_INDENT)),
                    styles::accent(),
                ),
                Span::styled(practice.title.clone(), styles::text_bright_bold()),
            ])];
            for part in wrap(
                &practice.description,
                width.saturating_sub(PRACTICE_INDENT),
            ) {
                lines.push(Line::from(vec![
                    Span::raw(pad.clone()),
                    Span::styled(part, styles::text_secondary()),
                ]));
            }
            chunks.push(Chunk::Text(lines));
        }

        chunks
    }
}

const AUTH_PITCH: &str = "Never leave your resources open. Modern APIs use Tokens \
(like JWT or OAuth) passed in the Headers, not in the URL.";

pub struct AuthHeadersPanel {
    icons: IconSet,
}

impl AuthHeadersPanel {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let inner = Panel::inner_width(width);
        let key_style = Style::default().fg(palette::ACCENT_ALT);

        let mut lines = wrapped_lines(AUTH_PITCH, inner, styles::text_primary());
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Request Headers  ", styles::text_muted()),
            Span::styled(" SECURE ", styles::pill(ColorTag::Green)),
        ]));
        lines.push(Line::styled(
            "─".repeat(usize::from(inner.min(40))),
            styles::border_inactive(),
        ));
        lines.push(Line::from(vec![
            Span::styled("Authorization: ", key_style),
            Span::styled(
                "Bearer eyJhbGciOiJIUzI1...",
                Style::default().fg(palette::STATUS_GREEN),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Content-Type:  ", key_style),
            Span::styled("application/json", styles::text_primary()),
        ]));

        vec![Chunk::Panel(
            Panel::new(lines)
                .title(Line::from(vec![
                    Span::styled(
                        format!(" {} ", self.icons.icon(IconRef::Lock)),
                        styles::accent(),
                    ),
                    Span::styled("Authenticating APIs ", styles::text_bright_bold()),
                ]))
                .border_color(palette::ACCENT_ALT),
        )]
    }
}
