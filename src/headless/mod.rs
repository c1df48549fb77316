//! Headless mode - NDJSON event output for scripted walkthroughs
//!
//! Runs the guide without a terminal UI. Commands are read one per line
//! from stdin and every observable change is written to stdout as a JSON
//! object on its own line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","section":"intro","timestamp":1704700001000}
//! {"event":"request_started","method":"GET","url":"https://api.example.com/users/123","timestamp":1704700002000}
//! {"event":"response_revealed","method":"GET","no_content":false,"body":"{...}","timestamp":1704700002800}
//! ```

pub mod commands;
pub mod runner;

use apiguide_app::labs::SimulatedResponse;
use apiguide_app::EngineEvent;
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine is up and reading commands
    Ready { section: String, timestamp: i64 },

    SectionChanged {
        from: String,
        to: String,
        timestamp: i64,
    },

    RequestStarted {
        method: String,
        url: String,
        timestamp: i64,
    },

    ResponseRevealed {
        method: String,
        no_content: bool,
        body: Option<String>,
        timestamp: i64,
    },

    UrlChanged { url: String, timestamp: i64 },

    ScenarioStarted {
        id: String,
        code: u16,
        timestamp: i64,
    },

    ScenarioRevealed {
        id: String,
        code: u16,
        message: String,
        timestamp: i64,
    },

    /// A stdin line that did not parse as a command
    Ignored {
        line: String,
        reason: String,
        timestamp: i64,
    },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(section: &str) -> Self {
        Self::Ready {
            section: section.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn ignored(line: &str, reason: String) -> Self {
        Self::Ignored {
            line: line.to_string(),
            reason,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event into its NDJSON form
    pub fn from_engine(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::SectionChanged { from, to } => Self::SectionChanged {
                from: from.id().to_string(),
                to: to.id().to_string(),
                timestamp,
            },
            EngineEvent::RequestStarted { method, url } => Self::RequestStarted {
                method: method.clone(),
                url: url.clone(),
                timestamp,
            },
            EngineEvent::ResponseRevealed { method, response } => Self::ResponseRevealed {
                method: method.clone(),
                no_content: response.is_no_content(),
                body: match response {
                    SimulatedResponse::Json(body) => Some(body.clone()),
                    SimulatedResponse::NoContent => None,
                },
                timestamp,
            },
            EngineEvent::UrlChanged { url } => Self::UrlChanged {
                url: url.clone(),
                timestamp,
            },
            EngineEvent::ScenarioStarted { id, code } => Self::ScenarioStarted {
                id: id.clone(),
                code: *code,
                timestamp,
            },
            EngineEvent::ScenarioRevealed { id, code, message } => Self::ScenarioRevealed {
                id: id.clone(),
                code: *code,
                message: message.clone(),
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiguide_core::Section;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_ready_serialization() {
        let value = to_value(&HeadlessEvent::ready("intro"));

        assert_eq!(value["event"], "ready");
        assert_eq!(value["section"], "intro");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_section_changed_uses_ids() {
        let event = HeadlessEvent::from_engine(&EngineEvent::SectionChanged {
            from: Section::Intro,
            to: Section::Status,
        });
        let value = to_value(&event);

        assert_eq!(value["event"], "section_changed");
        assert_eq!(value["from"], "intro");
        assert_eq!(value["to"], Section::Status.id());
    }

    #[test]
    fn test_no_content_response_has_null_body() {
        let event = HeadlessEvent::from_engine(&EngineEvent::ResponseRevealed {
            method: "DELETE".to_string(),
            response: SimulatedResponse::NoContent,
        });
        let value = to_value(&event);

        assert_eq!(value["event"], "response_revealed");
        assert_eq!(value["method"], "DELETE");
        assert_eq!(value["no_content"], true);
        assert!(value["body"].is_null());
    }

    #[test]
    fn test_json_response_carries_body() {
        let event = HeadlessEvent::from_engine(&EngineEvent::ResponseRevealed {
            method: "GET".to_string(),
            response: SimulatedResponse::Json("{\"id\": 123}".to_string()),
        });
        let value = to_value(&event);

        assert_eq!(value["no_content"], false);
        assert_eq!(value["body"], "{\"id\": 123}");
    }

    #[test]
    fn test_scenario_revealed_serialization() {
        let event = HeadlessEvent::from_engine(&EngineEvent::ScenarioRevealed {
            id: "not_found".to_string(),
            code: 404,
            message: "Not Found".to_string(),
        });
        let value = to_value(&event);

        assert_eq!(value["event"], "scenario_revealed");
        assert_eq!(value["id"], "not_found");
        assert_eq!(value["code"], 404);
        assert_eq!(value["message"], "Not Found");
    }

    #[test]
    fn test_ignored_and_shutdown_serialization() {
        let value = to_value(&HeadlessEvent::ignored("jump", "unknown command 'jump'".into()));
        assert_eq!(value["event"], "ignored");
        assert_eq!(value["line"], "jump");
        assert_eq!(value["reason"], "unknown command 'jump'");

        let value = to_value(&HeadlessEvent::from_engine(&EngineEvent::Shutdown));
        assert_eq!(value["event"], "shutdown");
    }
}
