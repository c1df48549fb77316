//! Grid of API architecture cards

use apiguide_core::ApiType;
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, styles};

use super::stack::{column_width, columns_for, grid, Chunk, Panel};
use super::text::wrapped_lines;

pub struct ApiTypesGrid<'a> {
    types: &'a [ApiType],
    icons: IconSet,
}

impl<'a> ApiTypesGrid<'a> {
    pub fn new(types: &'a [ApiType], icons: IconSet) -> Self {
        Self { types, icons }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let columns = columns_for(width, 3);
        let inner = Panel::inner_width(column_width(width, columns));

        let cards = self
            .types
            .iter()
            .map(|api| Panel::new(self.card_lines(api, inner)))
            .collect();

        grid(cards, columns)
    }

    fn card_lines(&self, api: &ApiType, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{}  ", self.icons.icon(api.icon)),
                styles::tagged_bold(api.color),
            ),
            Span::styled(api.title.clone(), styles::text_bright_bold()),
        ])];
        lines.push(Line::raw(""));
        lines.extend(wrapped_lines(
            &api.description,
            width,
            styles::text_secondary(),
        ));
        lines.push(Line::raw(""));

        let bullet = self.icons.chevron_right();
        for detail in &api.details {
            let wrapped = super::text::wrap(detail, width.saturating_sub(2));
            for (i, part) in wrapped.into_iter().enumerate() {
                let lead = if i == 0 { bullet } else { " " };
                lines.push(Line::from(vec![
                    Span::styled(format!("{lead} "), styles::text_muted()),
                    Span::styled(part, styles::text_muted()),
                ]));
            }
        }
        lines
    }
}
