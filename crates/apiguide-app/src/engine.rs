//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel and the reveal timer
//! map. Both frontends feed it messages and drain its channel.

use std::collections::HashMap;
use std::sync::Arc;

use apiguide_core::{Catalog, Section};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::actions::{self, RevealTaskMap};
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::labs::{RevealToken, SimulatedResponse};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    section: Section,
    method: String,
    rest_in_flight: bool,
    rest_token: RevealToken,
    response: Option<SimulatedResponse>,
    url: String,
    status_in_flight: bool,
    status_token: RevealToken,
    active_scenario: Option<String>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            section: state.current_section(),
            method: state.rest.selected().to_string(),
            rest_in_flight: state.rest.is_in_flight(),
            rest_token: state.rest.latest_token(),
            response: state.rest.response().cloned(),
            url: state.endpoint.compose(),
            status_in_flight: state.status.is_in_flight(),
            status_token: state.status.latest_token(),
            active_scenario: state.status.active().map(|s| s.id.clone()),
        }
    }
}

/// Orchestration engine for the API Guide.
///
/// Encapsulates all state shared between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Reveal timer tracking
/// - Event broadcasting for external consumers
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Pending reveal timers, one per lab
    pub reveal_tasks: RevealTaskMap,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine.
    ///
    /// Must be called from within a tokio runtime; the OS signal handler is
    /// spawned here.
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let state = AppState::with_config(catalog, settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let reveal_tasks: RevealTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            reveal_tasks,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever it changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.reveal_tasks);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abort all pending reveal timers and notify subscribers.
    pub fn shutdown(&mut self) {
        let aborted = actions::abort_all(&self.reveal_tasks);
        if aborted > 0 {
            info!("Aborted {} pending reveal timer(s)", aborted);
        }
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.section != post.section {
            self.emit(EngineEvent::SectionChanged {
                from: pre.section,
                to: post.section,
            });
        }

        if post.rest_in_flight && post.rest_token != pre.rest_token {
            self.emit(EngineEvent::RequestStarted {
                method: post.method.clone(),
                url: self.state.rest.request_url(&self.state.catalog),
            });
        }

        if pre.rest_in_flight && !post.rest_in_flight {
            if let Some(response) = &post.response {
                self.emit(EngineEvent::ResponseRevealed {
                    method: post.method.clone(),
                    response: response.clone(),
                });
            }
        }

        if pre.url != post.url {
            self.emit(EngineEvent::UrlChanged {
                url: post.url.clone(),
            });
        }

        if post.status_in_flight && post.status_token != pre.status_token {
            if let Some(scenario) = self.state.status.pending() {
                self.emit(EngineEvent::ScenarioStarted {
                    id: scenario.id.clone(),
                    code: scenario.code,
                });
            }
        }

        if pre.status_in_flight && !post.status_in_flight {
            if let Some(scenario) = self.state.status.active() {
                self.emit(EngineEvent::ScenarioRevealed {
                    id: scenario.id.clone(),
                    code: scenario.code,
                    message: scenario.message.clone(),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
