//! OpenAPI documentation panel

use apiguide_core::IconRef;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, palette, styles};

use super::stack::{Chunk, Panel};
use super::text::{centered_lines, display_width};

const PITCH: &str = "OpenAPI (formerly Swagger) allows you to describe your API structure in a \
standard format. This generates automatic documentation, client SDKs, and validation tools.";

const PILLS: [&str; 3] = [
    "Standardized Schema",
    "Auto-generated Docs",
    "Interactive Testing",
];

const PITCH_WIDTH: u16 = 64;

pub struct OpenApiPanel {
    icons: IconSet,
}

impl OpenApiPanel {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let inner = Panel::inner_width(width);

        let mut lines = vec![
            Line::raw(""),
            Line::styled(self.icons.icon(IconRef::Server), styles::text_secondary()).centered(),
            Line::raw(""),
            Line::styled("Don't make developers guess.", styles::text_bright_bold()).centered(),
            Line::raw(""),
        ];
        lines.extend(centered_lines(
            PITCH,
            inner.min(PITCH_WIDTH),
            styles::text_secondary(),
        ));
        lines.push(Line::raw(""));
        lines.extend(pill_lines(inner));
        lines.push(Line::raw(""));

        vec![Chunk::Panel(Panel::new(lines).background(palette::POPUP_BG))]
    }
}

/// The feature pills on one row when they fit, one per row otherwise
fn pill_lines(width: u16) -> Vec<Line<'static>> {
    let pill_style = Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::CODE_BG);
    let pill = |text: &'static str| Span::styled(format!(" {text} "), pill_style);

    let total: u16 = PILLS.iter().map(|p| display_width(p) + 2).sum::<u16>()
        + 2 * (PILLS.len() as u16 - 1);

    if total <= width {
        let mut spans = Vec::new();
        for (i, text) in PILLS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(pill(text));
        }
        vec![Line::from(spans).centered()]
    } else {
        PILLS
            .iter()
            .map(|text| Line::from(pill(text)).centered())
            .collect()
    }
}
