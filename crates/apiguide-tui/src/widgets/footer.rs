//! Closing footer shown under the last section

use chrono::Datelike;
use ratatui::text::Line;

use crate::theme::styles;

use super::stack::Chunk;
use super::text::centered_lines;

const PITCH: &str = "Start simple. Design your resources, choose your endpoints, and stick to \
standards. The world of APIs connects everything we use today.";

const PITCH_WIDTH: u16 = 56;

pub struct Footer {
    year: i32,
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Footer stamped with the local calendar year
    pub fn current() -> Self {
        Self::new(chrono::Local::now().year())
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        vec![
            Chunk::Gap(1),
            Chunk::Text(vec![Line::styled(
                "─".repeat(usize::from(width)),
                styles::border_inactive(),
            )]),
            Chunk::Gap(1),
            Chunk::Text(vec![
                Line::styled("Ready to Build?", styles::text_bright_bold()).centered()
            ]),
            Chunk::Gap(1),
            Chunk::Text(centered_lines(
                PITCH,
                width.min(PITCH_WIDTH),
                styles::text_secondary(),
            )),
            Chunk::Gap(1),
            Chunk::Text(vec![
                Line::styled(
                    format!("© {} API Fundamentals Interactive Guide.", self.year),
                    styles::text_muted(),
                )
                .centered(),
                Line::styled(
                    "Based on the \"API Design and Architecture\" documentation.",
                    styles::text_muted(),
                )
                .centered(),
            ]),
            Chunk::Gap(1),
        ]
    }
}
