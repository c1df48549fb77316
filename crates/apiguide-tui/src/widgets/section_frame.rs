//! Section wrapper: centered heading, optional subtitle, then the body

use apiguide_core::Section;
use ratatui::text::Line;

use crate::theme::styles;

use super::stack::{Chunk, Stack};
use super::text::{centered_lines, display_width};

/// Subtitles wrap narrower than the body so they read as a lede
const SUBTITLE_WIDTH: u16 = 72;

pub struct SectionFrame {
    section: Section,
    body: Vec<Chunk>,
}

impl SectionFrame {
    pub fn new(section: Section, body: Vec<Chunk>) -> Self {
        Self { section, body }
    }

    pub fn into_stack(self, width: u16) -> Stack {
        let title = self.section.title();
        let rule_width = display_width(title).min(width);

        let mut stack = Stack::new();
        stack.push(Chunk::Gap(1));
        stack.push(Chunk::Text(centered_lines(
            title,
            width,
            styles::text_bright_bold(),
        )));
        stack.push(Chunk::Text(vec![Line::styled(
            "─".repeat(usize::from(rule_width)),
            styles::accent(),
        )
        .centered()]));

        if let Some(subtitle) = self.section.subtitle() {
            stack.push(Chunk::Gap(1));
            stack.push(Chunk::Text(centered_lines(
                subtitle,
                width.min(SUBTITLE_WIDTH),
                styles::text_secondary(),
            )));
        }

        if !self.body.is_empty() {
            stack.push(Chunk::Gap(1));
            stack.extend(self.body);
        }
        stack.push(Chunk::Gap(1));
        stack
    }
}
