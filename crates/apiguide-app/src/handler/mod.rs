//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Section changes, menu and scroll handlers
//! - `labs`: REST, endpoint, status and JSON lab handlers

pub(crate) mod keys;
pub(crate) mod labs;
pub(crate) mod navigation;
pub(crate) mod update;


use std::time::Duration;

use crate::labs::{LabKind, RevealToken};
use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Wait `delay`, then send `Message::RevealDue { lab, token }`.
    /// Replaces any timer already running for `lab`.
    ScheduleReveal {
        lab: LabKind,
        token: RevealToken,
        delay: Duration,
    },

    /// Abort the pending timer for `lab`, if any
    CancelReveal { lab: LabKind },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
