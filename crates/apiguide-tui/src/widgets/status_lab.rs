//! Status lab picker/result panels and the status-code reference cards

use apiguide_app::labs::StatusLab;
use apiguide_core::{Catalog, Scenario, StatusCodeGroup};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, palette, styles};

use super::stack::{column_width, columns_for, grid, Chunk, Panel};
use super::text::{wrap, wrapped_lines};

/// Below this width the picker and result stack vertically
const SIDE_BY_SIDE_WIDTH: u16 = 80;

pub struct StatusLabPanel<'a> {
    lab: &'a StatusLab,
    catalog: &'a Catalog,
    icons: IconSet,
    frame: u64,
}

impl<'a> StatusLabPanel<'a> {
    pub fn new(lab: &'a StatusLab, catalog: &'a Catalog, icons: IconSet, frame: u64) -> Self {
        Self {
            lab,
            catalog,
            icons,
            frame,
        }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        if self.catalog.scenarios.is_empty() {
            return Vec::new();
        }

        if width >= SIDE_BY_SIDE_WIDTH {
            let inner = Panel::inner_width(column_width(width, 2));
            vec![Chunk::Row {
                panels: vec![self.picker(), self.result(inner)],
                columns: 2,
            }]
        } else {
            let inner = Panel::inner_width(width);
            vec![
                Chunk::Panel(self.picker()),
                Chunk::Gap(1),
                Chunk::Panel(self.result(inner)),
            ]
        }
    }

    fn picker(&self) -> Panel {
        let lines = self
            .catalog
            .scenarios
            .iter()
            .enumerate()
            .map(|(i, scenario)| self.picker_line(scenario, i == self.lab.cursor()))
            .collect();

        Panel::new(lines)
            .title(Line::styled(" Choose a Scenario ", styles::accent_bold()))
            .focused(true)
    }

    fn picker_line(&self, scenario: &Scenario, selected: bool) -> Line<'static> {
        let marker = if selected {
            self.icons.chevron_right()
        } else {
            " "
        };
        let label_style = if selected {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(format!("{marker} "), styles::accent()),
            Span::styled(
                format!("{} ", self.icons.icon(scenario.icon)),
                styles::tagged(scenario.color),
            ),
            Span::styled(format!(" {} ", scenario.label), label_style),
            Span::styled(" GET", styles::text_muted()),
        ])
    }

    fn result(&self, inner: u16) -> Panel {
        let lines = if self.lab.is_in_flight() {
            vec![Line::styled(
                format!("{} Server processing...", self.icons.spinner(self.frame)),
                styles::text_muted(),
            )]
        } else if let Some(scenario) = self.lab.active() {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", self.icons.icon(scenario.icon)),
                        styles::tagged(scenario.color),
                    ),
                    Span::styled(
                        scenario.code.to_string(),
                        styles::tagged_bold(scenario.color),
                    ),
                ]),
                Line::styled(scenario.message.clone(), styles::tagged_bold(scenario.color)),
                Line::raw(""),
            ];
            lines.extend(wrapped_lines(
                &scenario.description,
                inner,
                styles::text_secondary(),
            ));
            lines
        } else {
            wrapped_lines(
                "Select a scenario to simulate the server response.",
                inner,
                styles::text_muted().add_modifier(Modifier::ITALIC),
            )
        };

        let mut panel = Panel::new(lines).title(Line::styled(
            " Server Response ",
            styles::text_secondary(),
        ));
        if let Some(scenario) = self.lab.active().filter(|_| !self.lab.is_in_flight()) {
            panel = panel.border_color(palette::color_for(scenario.color));
        }
        panel
    }
}

pub struct StatusGroups<'a> {
    groups: &'a [StatusCodeGroup],
}

impl<'a> StatusGroups<'a> {
    pub fn new(groups: &'a [StatusCodeGroup]) -> Self {
        Self { groups }
    }

    pub fn chunks(&self, width: u16) -> Vec<Chunk> {
        let columns = columns_for(width, 2);
        let inner = Panel::inner_width(column_width(width, columns));

        let cards = self
            .groups
            .iter()
            .map(|group| Panel::new(group_lines(group, inner)))
            .collect();

        grid(cards, columns)
    }
}

fn group_lines(group: &StatusCodeGroup, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        format!("{} ({})", group.name, group.range),
        styles::tagged_bold(group.color),
    )];
    lines.extend(wrapped_lines(
        &group.description,
        width,
        styles::text_secondary(),
    ));
    lines.push(Line::raw(""));

    for example in &group.examples {
        // Code column is "NNN  ", meanings wrap under themselves
        for (i, part) in wrap(&example.meaning, width.saturating_sub(5))
            .into_iter()
            .enumerate()
        {
            let code = if i == 0 {
                Span::styled(
                    format!("{:<5}", example.code),
                    styles::tagged_bold(group.color),
                )
            } else {
                Span::raw("     ")
            };
            lines.push(Line::from(vec![
                code,
                Span::styled(part, styles::text_primary()),
            ]));
        }
    }
    lines
}
