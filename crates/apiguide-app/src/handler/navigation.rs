//! Section navigation, menu and scroll handlers

use apiguide_core::Section;
use tracing::debug;

use crate::state::{lab_for_section, AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Show `section`. Leaving a section that hosts a timed lab unmounts it:
/// the lab's pending reveal is dropped and its timer aborted.
pub fn handle_go_to_section(state: &mut AppState, section: Section) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    if section == state.current_section() {
        state.nav.scroll_to_top();
        return UpdateResult::none();
    }

    let left = state.nav.go_to(section);
    debug!("Section {} -> {}", left, section);

    match lab_for_section(left) {
        Some(lab) if state.cancel_lab(lab) => {
            UpdateResult::action(UpdateAction::CancelReveal { lab })
        }
        _ => UpdateResult::none(),
    }
}

pub fn handle_next_section(state: &mut AppState) -> UpdateResult {
    let next = state.current_section().next();
    handle_go_to_section(state, next)
}

pub fn handle_prev_section(state: &mut AppState) -> UpdateResult {
    let prev = state.current_section().prev();
    handle_go_to_section(state, prev)
}

pub fn handle_toggle_menu(state: &mut AppState) -> UpdateResult {
    state.ui_mode = match state.ui_mode {
        UiMode::Menu => UiMode::Normal,
        UiMode::Normal => {
            state.nav.open_menu();
            UiMode::Menu
        }
    };
    UpdateResult::none()
}

pub fn handle_close_menu(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_menu_up(state: &mut AppState) -> UpdateResult {
    state.nav.menu_up();
    UpdateResult::none()
}

pub fn handle_menu_down(state: &mut AppState) -> UpdateResult {
    state.nav.menu_down();
    UpdateResult::none()
}

pub fn handle_menu_select(state: &mut AppState) -> UpdateResult {
    let section = state.nav.menu_selection();
    handle_go_to_section(state, section)
}

pub fn handle_scroll(state: &mut AppState, delta: i32) -> UpdateResult {
    state.nav.scroll_by(delta);
    UpdateResult::none()
}
