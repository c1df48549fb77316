//! REST lab: request/response simulator, URL anatomy builder and the
//! concept cards underneath

use apiguide_app::labs::{EndpointLab, Resource, RestSimulator, SegmentKind, SimulatedResponse};
use apiguide_app::labs::rest::EXAMPLE_BODY;
use apiguide_core::{Catalog, ColorTag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, palette, styles};

use super::stack::{column_width, columns_for, grid, Chunk, Panel};
use super::text::wrapped_lines;

fn label(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        styles::text_muted().add_modifier(Modifier::BOLD),
    )
}

// ─────────────────────────────────────────────────────────
// Request / response simulator
// ─────────────────────────────────────────────────────────

pub struct RestSimulatorPanel<'a> {
    rest: &'a RestSimulator,
    catalog: &'a Catalog,
    icons: IconSet,
    frame: u64,
}

impl<'a> RestSimulatorPanel<'a> {
    pub fn new(rest: &'a RestSimulator, catalog: &'a Catalog, icons: IconSet, frame: u64) -> Self {
        Self {
            rest,
            catalog,
            icons,
            frame,
        }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let Some(method) = self.rest.selected_spec(self.catalog) else {
            return Vec::new();
        };
        let inner = Panel::inner_width(width);

        let mut lines = vec![self.method_tabs(), Line::raw("")];
        lines.push(self.request_line(method.color));
        lines.push(Line::raw(""));

        lines.push(label("REQUEST CONTEXT"));
        lines.push(Line::styled("Method Meaning", styles::text_muted()));
        lines.extend(wrapped_lines(
            &method.description,
            inner,
            styles::text_primary(),
        ));
        lines.push(Line::styled("Idempotent?", styles::text_muted()));
        lines.push(Line::styled(
            method.idempotency_label(),
            styles::text_primary(),
        ));
        if self.rest.has_request_body() {
            lines.push(Line::styled("Payload (Body)", styles::text_muted()));
            lines.extend(code_lines(EXAMPLE_BODY, styles::text_secondary()));
        }

        lines.push(Line::raw(""));
        lines.push(label("RESPONSE"));
        lines.extend(self.response_lines());

        vec![Chunk::Panel(
            Panel::new(lines)
                .title(Line::styled(" Request / Response ", styles::accent_bold()))
                .focused(true),
        )]
    }

    fn method_tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, method) in self.catalog.http_methods.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if method.name == self.rest.selected() {
                styles::pill(method.color)
            } else {
                styles::tagged(method.color)
            };
            spans.push(Span::styled(format!(" {} ", method.name), style));
        }
        Line::from(spans)
    }

    fn request_line(&self, color: ColorTag) -> Line<'static> {
        let send = if self.rest.is_in_flight() {
            Span::styled(
                format!("{} Sending", self.icons.spinner(self.frame)),
                styles::accent(),
            )
        } else {
            Span::styled(
                format!("{} Send [s]", self.icons.play()),
                styles::accent_bold(),
            )
        };

        Line::from(vec![
            Span::styled(
                self.rest.selected().to_string(),
                styles::tagged_bold(color),
            ),
            Span::raw(" "),
            Span::styled(
                self.rest.request_url(self.catalog),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::CODE_BG),
            ),
            Span::raw("  "),
            send,
        ])
    }

    fn response_lines(&self) -> Vec<Line<'static>> {
        if self.rest.is_in_flight() {
            return vec![Line::styled(
                format!("{} Connecting to server...", self.icons.spinner(self.frame)),
                styles::text_muted(),
            )];
        }

        let italic_muted = styles::text_muted().add_modifier(Modifier::ITALIC);
        match self.rest.response() {
            Some(SimulatedResponse::Json(body)) => {
                code_lines(body, Style::default().fg(palette::STATUS_GREEN))
            }
            Some(SimulatedResponse::NoContent) => vec![Line::styled(
                "204 No Content",
                styles::text_secondary().add_modifier(Modifier::ITALIC),
            )],
            None => vec![Line::styled("Ready to send request...", italic_muted)],
        }
    }
}

/// Preformatted text, one line per source line, indentation kept
fn code_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    text.lines()
        .map(|l| Line::styled(format!("  {l}"), style))
        .collect()
}

// ─────────────────────────────────────────────────────────
// URL anatomy builder
// ─────────────────────────────────────────────────────────

const BUILDER_INTRO: &str =
    "Build a valid REST API endpoint by combining resources, path parameters, and query strings.";
const ID_NOTE: &str = "Used to identify a specific resource inside the collection.";
const QUERY_NOTE: &str =
    "Used to modify the results (sort, filter, search) without changing the resource itself.";

/// Color a URL segment is drawn in
pub fn segment_color(kind: SegmentKind) -> ColorTag {
    match kind {
        SegmentKind::Base => ColorTag::Slate,
        SegmentKind::Collection => ColorTag::Green,
        SegmentKind::Identifier => ColorTag::Blue,
        SegmentKind::Modifier => ColorTag::Purple,
    }
}

pub struct EndpointLabPanel<'a> {
    lab: &'a EndpointLab,
    icons: IconSet,
}

impl<'a> EndpointLabPanel<'a> {
    pub fn new(lab: &'a EndpointLab, icons: IconSet) -> Self {
        Self { lab, icons }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let inner = Panel::inner_width(width);

        let mut lines = wrapped_lines(BUILDER_INTRO, inner, styles::text_secondary());
        lines.push(Line::raw(""));

        lines.push(control_label("RESOURCE (COLLECTION)", "r"));
        lines.push(self.resource_picker());
        lines.push(Line::raw(""));

        lines.push(control_label("PATH PARAMETER (ID)", "i"));
        lines.push(self.toggle_line(
            "Specific Item ID",
            self.lab.id_visible(),
            segment_color(SegmentKind::Identifier),
        ));
        lines.extend(wrapped_lines(ID_NOTE, inner, styles::text_muted()));
        lines.push(Line::raw(""));

        lines.push(control_label("QUERY PARAMETER (FILTER)", "f"));
        lines.push(self.toggle_line(
            "Sort / Filter",
            self.lab.query_visible(),
            segment_color(SegmentKind::Modifier),
        ));
        lines.extend(wrapped_lines(QUERY_NOTE, inner, styles::text_muted()));
        lines.push(Line::raw(""));

        lines.push(Line::styled("GET Request", styles::text_muted()));
        lines.push(self.url_line());
        lines.push(self.legend());

        vec![Chunk::Panel(Panel::new(lines).title(Line::styled(
            " URL Anatomy Builder ",
            styles::accent_bold(),
        )))]
    }

    fn resource_picker(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, resource) in Resource::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if *resource == self.lab.resource() {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {resource} "), style));
        }
        Line::from(spans)
    }

    fn toggle_line(&self, text: &'static str, on: bool, color: ColorTag) -> Line<'static> {
        let style = if on {
            styles::tagged(color)
        } else {
            styles::text_secondary()
        };
        Line::from(vec![
            Span::styled(format!("{} ", self.icons.checkbox(on)), style),
            Span::styled(text, style),
        ])
    }

    /// The composed URL, each active segment in its role color
    fn url_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for segment in self.lab.segments().into_iter().filter(|s| s.active) {
            let color = segment_color(segment.kind);
            match segment.kind {
                SegmentKind::Base => {
                    spans.push(Span::styled(segment.text, styles::tagged(color)));
                }
                SegmentKind::Collection => {
                    spans.push(Span::styled(segment.text, styles::tagged_bold(color)));
                }
                SegmentKind::Identifier | SegmentKind::Modifier => {
                    // Leading '/' or '?' is punctuation, the rest is the value
                    let (sep, value) = segment.text.split_at(1);
                    spans.push(Span::styled(sep, styles::text_muted()));
                    spans.push(Span::styled(value, styles::tagged_bold(color)));
                }
            }
        }
        Line::from(spans)
    }

    fn legend(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for segment in self
            .lab
            .segments()
            .into_iter()
            .filter(|s| s.kind != SegmentKind::Base)
        {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            let style = if segment.active {
                styles::tagged_bold(segment_color(segment.kind))
            } else {
                styles::text_muted().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(format!("▔ {}", segment.kind.label()), style));
        }
        Line::from(spans)
    }
}

fn control_label(text: &'static str, key: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(text, styles::text_muted().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(format!("[{key}]"), styles::keybinding()),
    ])
}

// ─────────────────────────────────────────────────────────
// Concept cards
// ─────────────────────────────────────────────────────────

const CONCEPTS: [(&str, &str); 3] = [
    ("Resource", "The noun you interact with (e.g., User, Post)."),
    (
        "Endpoint",
        "The specific URL where the resource lives (e.g., /users/1).",
    ),
    (
        "Stateless",
        "Each request contains all info needed. The server doesn't remember previous requests.",
    ),
];

pub struct ConceptCards;

impl ConceptCards {
    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let columns = columns_for(width, CONCEPTS.len());
        let inner = Panel::inner_width(column_width(width, columns));

        let cards = CONCEPTS
            .iter()
            .map(|(title, body)| {
                let mut lines = vec![Line::styled(*title, styles::text_bright_bold())];
                lines.extend(wrapped_lines(body, inner, styles::text_secondary()));
                Panel::new(lines)
            })
            .collect();

        grid(cards, columns)
    }
}
