//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use apiguide_core::Section;

use crate::labs::SimulatedResponse;

/// Domain events emitted by the Engine.
///
/// Derived by diffing state snapshots taken before and after a message is
/// processed, so subscribers see one event per observable change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SectionChanged { from: Section, to: Section },

    // ─────────────────────────────────────────────────────────
    // REST Simulator
    // ─────────────────────────────────────────────────────────
    /// A simulated request went out and is waiting for its delay
    RequestStarted { method: String, url: String },

    /// The delay elapsed and the canned response is showing
    ResponseRevealed {
        method: String,
        response: SimulatedResponse,
    },

    // ─────────────────────────────────────────────────────────
    // Endpoint Lab
    // ─────────────────────────────────────────────────────────
    UrlChanged { url: String },

    // ─────────────────────────────────────────────────────────
    // Status Lab
    // ─────────────────────────────────────────────────────────
    ScenarioStarted { id: String, code: u16 },

    ScenarioRevealed { id: String, code: u16, message: String },

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    Shutdown,
}

impl EngineEvent {
    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::SectionChanged { .. } => "section_changed",
            EngineEvent::RequestStarted { .. } => "request_started",
            EngineEvent::ResponseRevealed { .. } => "response_revealed",
            EngineEvent::UrlChanged { .. } => "url_changed",
            EngineEvent::ScenarioStarted { .. } => "scenario_started",
            EngineEvent::ScenarioRevealed { .. } => "scenario_revealed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
