//! Main render/view function (View in TEA pattern)


use apiguide_app::state::{AppState, UiMode};
use apiguide_core::Section;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{Chunk, SectionFrame, Stack};

/// Build the current section's content for `width` columns
pub fn page(state: &AppState, icons: IconSet, width: u16) -> Stack {
    let section = state.current_section();
    let catalog = &state.catalog;
    let frame = state.animation_frame;

    let body: Vec<Chunk> = match section {
        Section::Intro => {
            let mut stack = Stack::new();
            stack.extend(widgets::IntroHero::new(icons).chunks(width));
            return stack;
        }
        Section::Types => widgets::ApiTypesGrid::new(&catalog.api_types, icons).chunks(width),
        Section::Rest => {
            let mut body =
                widgets::RestSimulatorPanel::new(&state.rest, catalog, icons, frame).chunks(width);
            push_spaced(
                &mut body,
                widgets::EndpointLabPanel::new(&state.endpoint, icons).chunks(width),
            );
            push_spaced(&mut body, widgets::ConceptCards.chunks(width));
            body
        }
        Section::Json => widgets::JsonExplainer::new(catalog, state.json.cursor()).chunks(width),
        Section::Status => {
            let mut body =
                widgets::StatusLabPanel::new(&state.status, catalog, icons, frame).chunks(width);
            push_spaced(
                &mut body,
                widgets::StatusGroups::new(&catalog.status_codes).chunks(width),
            );
            body
        }
        Section::BestPractices => {
            let mut body =
                widgets::BestPracticesList::new(&catalog.best_practices, icons).chunks(width);
            push_spaced(
                &mut body,
                widgets::AuthHeadersPanel::new(icons).chunks(width),
            );
            body
        }
        Section::OpenApi => widgets::OpenApiPanel::new(icons).chunks(width),
    };

    let mut stack = SectionFrame::new(section, body).into_stack(width);
    if section == Section::OpenApi {
        stack.extend(widgets::Footer::current().chunks(width));
    }
    stack
}

/// Append `more` after a blank row, skipping the row when either side is empty
fn push_spaced(body: &mut Vec<Chunk>, more: Vec<Chunk>) {
    if more.is_empty() {
        return;
    }
    if !body.is_empty() {
        body.push(Chunk::Gap(1));
    }
    body.extend(more);
}

/// Render the page into an offscreen buffer and copy the visible window
fn render_scrolled(page: Stack, content_height: u16, scroll: u16, area: Rect, buf: &mut Buffer) {
    if area.is_empty() || content_height == 0 {
        return;
    }

    let canvas_area = Rect::new(0, 0, area.width, content_height);
    let mut canvas = Buffer::empty(canvas_area);
    canvas.set_style(canvas_area, Style::default().bg(palette::DEEPEST_BG));
    page.render(canvas_area, &mut canvas);

    for row in 0..area.height {
        let src_y = scroll.saturating_add(row);
        if src_y >= content_height {
            break;
        }
        for col in 0..area.width {
            if let (Some(src), Some(dst)) = (
                canvas.cell((col, src_y)),
                buf.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

/// Render the complete UI (View function in TEA)
///
/// Writes the measured content and viewport heights back into the nav
/// state so scrolling and the progress bar see this frame's geometry.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);
    let show_progress = state.settings.ui.show_progress;
    let areas = layout::create(area, show_progress);
    let section = state.current_section();

    let content = page(state, icons, areas.body.width);
    let content_height = content.height();
    state.nav.set_viewport(content_height, areas.body.height);
    render_scrolled(
        content,
        content_height,
        state.nav.scroll(),
        areas.body,
        frame.buffer_mut(),
    );

    if show_progress {
        frame.render_widget(widgets::ProgressBar::new(state.nav.progress()), areas.progress);
    }
    frame.render_widget(widgets::NavBar::new(section, icons), areas.nav);
    frame.render_widget(widgets::HintsBar::new(section, state.ui_mode), areas.hints);

    if state.ui_mode == UiMode::Menu {
        frame.render_widget(
            widgets::NavMenu::new(state.nav.menu_cursor(), section, icons),
            area,
        );
    }
}
