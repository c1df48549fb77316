//! Key event handlers for different UI modes

use apiguide_core::Section;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Menu => handle_key_menu(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while the section menu is open
fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Esc | InputKey::Char('m') => Some(Message::CloseMenu),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Section-specific bindings win over the global ones
    let section_msg = match state.current_section() {
        Section::Intro => handle_key_intro(key),
        Section::Rest => handle_key_rest(key),
        Section::Status => handle_key_status(key),
        Section::Json => handle_key_json(key),
        _ => None,
    };
    if section_msg.is_some() {
        return section_msg;
    }

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::NextSection),
        InputKey::BackTab => Some(Message::PrevSection),
        InputKey::Char('m') => Some(Message::ToggleMenu),

        // '1'..'6' jump to the matching nav item
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Section::NAV
                .get(index)
                .map(|section| Message::GoToSection(*section))
        }

        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::PageDown),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::PageUp),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),

        _ => None,
    }
}

fn handle_key_intro(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::GoToSection(Section::Types)),
        InputKey::Char('t') => Some(Message::GoToSection(Section::Rest)),
        _ => None,
    }
}

fn handle_key_rest(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::PrevMethod),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextMethod),
        InputKey::Enter | InputKey::Char('s') => Some(Message::SendRequest),
        InputKey::Char('r') => Some(Message::CycleResource),
        InputKey::Char('i') => Some(Message::ToggleIdSegment),
        InputKey::Char('f') => Some(Message::ToggleQuerySegment),
        _ => None,
    }
}

fn handle_key_status(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::PrevScenario),
        InputKey::Down => Some(Message::NextScenario),
        InputKey::Enter => Some(Message::TriggerSelectedScenario),
        _ => None,
    }
}

fn handle_key_json(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::JsonLineUp),
        InputKey::Down => Some(Message::JsonLineDown),
        _ => None,
    }
}
