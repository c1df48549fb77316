//! Message types for the application (TEA pattern)

use apiguide_core::Section;

use crate::input_key::InputKey;
use crate::labs::{LabKind, Resource, RevealToken};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for spinner animation
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    NextSection,
    PrevSection,
    GoToSection(Section),
    /// Open or close the section menu
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    /// Jump to the section under the menu cursor
    MenuSelect,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,

    // ─────────────────────────────────────────────────────────
    // REST Simulator Messages
    // ─────────────────────────────────────────────────────────
    SelectMethod(String),
    NextMethod,
    PrevMethod,
    SendRequest,

    // ─────────────────────────────────────────────────────────
    // Endpoint Lab Messages
    // ─────────────────────────────────────────────────────────
    SetResource(Resource),
    CycleResource,
    ToggleIdSegment,
    ToggleQuerySegment,

    // ─────────────────────────────────────────────────────────
    // Status Lab Messages
    // ─────────────────────────────────────────────────────────
    TriggerScenario(String),
    /// Trigger the scenario under the picker cursor
    TriggerSelectedScenario,
    NextScenario,
    PrevScenario,

    // ─────────────────────────────────────────────────────────
    // JSON Explainer Messages
    // ─────────────────────────────────────────────────────────
    JsonLineUp,
    JsonLineDown,

    // ─────────────────────────────────────────────────────────
    // Timer Messages
    // ─────────────────────────────────────────────────────────
    /// A scheduled reveal elapsed; applied only if `token` is still current
    RevealDue { lab: LabKind, token: RevealToken },
}
