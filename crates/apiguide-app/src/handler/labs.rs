//! Lab handlers: REST simulator sends, status scenarios and delayed reveals

use tracing::debug;

use crate::labs::{LabKind, RevealToken};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Select a method by name. Unknown names are ignored.
///
/// An in-flight send is dropped along with its timer.
pub fn handle_select_method(state: &mut AppState, name: &str) -> UpdateResult {
    let was_in_flight = state.rest.is_in_flight();
    if !state.rest.select_method(&state.catalog, name) {
        debug!("Ignoring unknown method {:?}", name);
        return UpdateResult::none();
    }
    cancel_if(was_in_flight, LabKind::Rest)
}

pub fn handle_step_method(state: &mut AppState, forward: bool) -> UpdateResult {
    let was_in_flight = state.rest.is_in_flight();
    let changed = if forward {
        state.rest.select_next(&state.catalog)
    } else {
        state.rest.select_prev(&state.catalog)
    };
    if !changed {
        return UpdateResult::none();
    }
    cancel_if(was_in_flight, LabKind::Rest)
}

pub fn handle_send_request(state: &mut AppState) -> UpdateResult {
    match state.rest.send() {
        Some(token) => {
            debug!("Simulated {} request {}", state.rest.selected(), token);
            UpdateResult::action(UpdateAction::ScheduleReveal {
                lab: LabKind::Rest,
                token,
                delay: state.settings.labs.rest_delay(),
            })
        }
        None => {
            debug!("Request already in flight, ignoring send");
            UpdateResult::none()
        }
    }
}

pub fn handle_trigger_scenario(state: &mut AppState, id: &str) -> UpdateResult {
    match state.status.trigger(&state.catalog, id) {
        Some(token) => {
            debug!("Triggered scenario {} {}", id, token);
            UpdateResult::action(UpdateAction::ScheduleReveal {
                lab: LabKind::Status,
                token,
                delay: state.settings.labs.status_delay(),
            })
        }
        None => {
            debug!("Ignoring unknown scenario {:?}", id);
            UpdateResult::none()
        }
    }
}

pub fn handle_reveal_due(state: &mut AppState, lab: LabKind, token: RevealToken) -> UpdateResult {
    let applied = match lab {
        LabKind::Rest => state.rest.reveal(token),
        LabKind::Status => state.status.reveal(token),
    };
    if !applied {
        debug!("Dropping stale {} reveal {}", lab, token);
    }
    UpdateResult::none()
}

fn cancel_if(was_in_flight: bool, lab: LabKind) -> UpdateResult {
    if was_in_flight {
        UpdateResult::action(UpdateAction::CancelReveal { lab })
    } else {
        UpdateResult::none()
    }
}
