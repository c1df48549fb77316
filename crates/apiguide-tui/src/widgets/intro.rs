//! Hero panel for the intro section

use apiguide_core::Section;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, palette, styles};

use super::stack::Chunk;
use super::text::centered_lines;

const PITCH: &str = "An API exposes a surface for other apps to interact with your app. \
Frontend and backend communicate via these calls, just like a waiter takes an order to the kitchen.";

const PITCH_WIDTH: u16 = 64;

pub struct IntroHero {
    icons: IconSet,
}

impl IntroHero {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let badge = Section::Intro.subtitle().unwrap_or_default();
        let headline = Line::from(vec![
            Span::styled("The ", styles::text_bright_bold()),
            Span::styled(
                "Messenger",
                Style::default()
                    .fg(palette::ACCENT_ALT)
                    .add_modifier(ratatui::style::Modifier::BOLD),
            ),
            Span::styled(" of the Web", styles::text_bright_bold()),
        ])
        .centered();

        let buttons = Line::from(vec![
            Span::styled(
                format!(" Enter  Start Exploring {} ", self.icons.arrow_right()),
                styles::focused_selected(),
            ),
            Span::raw("   "),
            Span::styled(
                " t  Try Simulator ",
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .bg(palette::POPUP_BG),
            ),
        ])
        .centered();

        vec![
            Chunk::Gap(2),
            Chunk::Text(vec![
                Line::styled(format!("( {badge} )"), styles::accent()).centered()
            ]),
            Chunk::Gap(1),
            Chunk::Text(vec![headline]),
            Chunk::Gap(1),
            Chunk::Text(centered_lines(
                PITCH,
                width.min(PITCH_WIDTH),
                styles::text_secondary(),
            )),
            Chunk::Gap(1),
            Chunk::Text(vec![buttons]),
            Chunk::Gap(2),
        ]
    }
}
