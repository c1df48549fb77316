//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, labs, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.rest.is_in_flight() || state.status.is_in_flight() {
                state.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::NextSection => navigation::handle_next_section(state),
        Message::PrevSection => navigation::handle_prev_section(state),
        Message::GoToSection(section) => navigation::handle_go_to_section(state, section),
        Message::ToggleMenu => navigation::handle_toggle_menu(state),
        Message::CloseMenu => navigation::handle_close_menu(state),
        Message::MenuUp => navigation::handle_menu_up(state),
        Message::MenuDown => navigation::handle_menu_down(state),
        Message::MenuSelect => navigation::handle_menu_select(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => navigation::handle_scroll(state, -1),
        Message::ScrollDown => navigation::handle_scroll(state, 1),
        Message::PageUp => {
            state.nav.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.nav.page_down();
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.nav.scroll_to_top();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // REST Simulator Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectMethod(name) => labs::handle_select_method(state, &name),
        Message::NextMethod => labs::handle_step_method(state, true),
        Message::PrevMethod => labs::handle_step_method(state, false),
        Message::SendRequest => labs::handle_send_request(state),

        // ─────────────────────────────────────────────────────────
        // Endpoint Lab Messages
        // ─────────────────────────────────────────────────────────
        Message::SetResource(resource) => {
            state.endpoint.set_resource(resource);
            UpdateResult::none()
        }
        Message::CycleResource => {
            state.endpoint.cycle_resource();
            UpdateResult::none()
        }
        Message::ToggleIdSegment => {
            state.endpoint.toggle_id_segment();
            UpdateResult::none()
        }
        Message::ToggleQuerySegment => {
            state.endpoint.toggle_query_segment();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Status Lab Messages
        // ─────────────────────────────────────────────────────────
        Message::TriggerScenario(id) => labs::handle_trigger_scenario(state, &id),
        Message::TriggerSelectedScenario => {
            match state.status.selected_id(&state.catalog) {
                Some(id) => UpdateResult::message(Message::TriggerScenario(id.to_string())),
                None => UpdateResult::none(),
            }
        }
        Message::NextScenario => {
            state.status.select_next(&state.catalog);
            UpdateResult::none()
        }
        Message::PrevScenario => {
            state.status.select_prev(&state.catalog);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // JSON Explainer Messages
        // ─────────────────────────────────────────────────────────
        Message::JsonLineUp => {
            state.json.move_up();
            UpdateResult::none()
        }
        Message::JsonLineDown => {
            state.json.move_down(&state.catalog);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Timer Messages
        // ─────────────────────────────────────────────────────────
        Message::RevealDue { lab, token } => labs::handle_reveal_due(state, lab, token),
    }
}
