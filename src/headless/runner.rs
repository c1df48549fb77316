//! Headless mode runner - main event loop without TUI
//!
//! Feeds stdin commands into the Engine and writes every engine event to
//! stdout as NDJSON.

use apiguide_app::config::Settings;
use apiguide_app::{Engine, EngineEvent, Message};
use apiguide_core::prelude::*;
use apiguide_core::Catalog;
use tokio::sync::{broadcast, mpsc};

use super::commands::parse_command;
use super::HeadlessEvent;

/// One line read from stdin, already parsed
#[derive(Debug, Clone, PartialEq)]
enum StdinInput {
    Command(Message),
    Ignored { line: String, reason: String },
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(catalog: Catalog, settings: Settings) -> Result<()> {
    info!("API Guide starting in HEADLESS mode");

    let mut engine = Engine::new(catalog, settings);
    let mut events = engine.subscribe();

    HeadlessEvent::ready(engine.state.current_section().id()).emit();

    // Spawn headless-specific stdin reader
    let (stdin_tx, mut stdin_rx) = mpsc::channel(256);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let result = headless_event_loop(&mut engine, &mut events, &mut stdin_rx).await;

    engine.shutdown();
    for event in drain_events(&mut events) {
        event.emit();
    }

    info!("API Guide headless mode exiting");
    result
}

/// Main headless event loop
///
/// Stdin lines and engine messages are handled on this task only, so output
/// keeps the order the lines were written in. After stdin closes the loop
/// keeps running until no reveal is pending.
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    stdin_rx: &mut mpsc::Receiver<StdinInput>,
) -> Result<()> {
    let mut stdin_closed = false;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        if stdin_closed && !has_pending_reveal(engine) {
            info!("Stdin closed and no reveal pending");
            break;
        }

        let output = tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => {
                    engine.process_message(msg);
                    drain_events(events)
                }
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            input = stdin_rx.recv(), if !stdin_closed => match input {
                Some(input) => handle_input(engine, events, input),
                None => {
                    stdin_closed = true;
                    Vec::new()
                }
            },
        };

        for event in output {
            event.emit();
        }
    }

    Ok(())
}

fn has_pending_reveal(engine: &Engine) -> bool {
    engine.state.rest.is_in_flight() || engine.state.status.is_in_flight()
}

/// Apply one stdin line and return what it produced, in order
fn handle_input(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    input: StdinInput,
) -> Vec<HeadlessEvent> {
    match input {
        StdinInput::Command(msg) => {
            engine.process_message(msg);
            drain_events(events)
        }
        StdinInput::Ignored { line, reason } => vec![HeadlessEvent::ignored(&line, reason)],
    }
}

/// Collect every event the engine has broadcast so far
fn drain_events(events: &mut broadcast::Receiver<EngineEvent>) -> Vec<HeadlessEvent> {
    let mut out = Vec::new();
    loop {
        match events.try_recv() {
            Ok(event) => out.push(HeadlessEvent::from_engine(&event)),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} event(s) dropped", skipped);
            }
            Err(_) => break,
        }
    }
    out
}

/// Read commands from stdin until EOF or `quit` (blocking version)
fn spawn_stdin_reader_blocking(input_tx: mpsc::Sender<StdinInput>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let input = match parse_command(&line) {
            Ok(Some(msg)) => StdinInput::Command(msg),
            Ok(None) => continue,
            Err(reason) => {
                warn!("Ignoring stdin line {:?}: {}", line, reason);
                StdinInput::Ignored {
                    line: line.trim().to_string(),
                    reason,
                }
            }
        };

        let quit = input == StdinInput::Command(Message::Quit);
        if input_tx.blocking_send(input).is_err() || quit {
            break;
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiguide_core::Section;
    use std::time::Duration;

    fn engine_at(section: Section) -> Engine {
        let mut settings = Settings::default();
        settings.behavior.start_section = section;
        Engine::new(Catalog::builtin(), settings)
    }

    #[tokio::test]
    async fn test_drain_events_empties_the_receiver() {
        let mut engine = engine_at(Section::Intro);
        let mut events = engine.subscribe();

        engine.process_message(Message::GoToSection(Section::Rest));
        engine.process_message(Message::ToggleQuerySegment);
        assert!(!drain_events(&mut events).is_empty());

        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_ignored_line_stays_behind_earlier_command() {
        let mut engine = engine_at(Section::Intro);
        let mut events = engine.subscribe();

        let mut output = handle_input(
            &mut engine,
            &mut events,
            StdinInput::Command(Message::GoToSection(Section::Rest)),
        );
        output.extend(handle_input(
            &mut engine,
            &mut events,
            StdinInput::Ignored {
                line: "jump".to_string(),
                reason: "unknown command 'jump'".to_string(),
            },
        ));

        assert_eq!(output.len(), 2);
        assert!(matches!(
            &output[0],
            HeadlessEvent::SectionChanged { to, .. } if to == "rest"
        ));
        assert!(matches!(
            &output[1],
            HeadlessEvent::Ignored { line, .. } if line == "jump"
        ));
    }

    #[tokio::test]
    async fn test_event_loop_stops_on_quit() {
        let mut engine = engine_at(Section::Intro);
        let mut events = engine.subscribe();
        let (input_tx, mut input_rx) = mpsc::channel(8);

        input_tx
            .send(StdinInput::Command(Message::Quit))
            .await
            .expect("channel open");

        headless_event_loop(&mut engine, &mut events, &mut input_rx)
            .await
            .expect("loop ends cleanly");
        assert!(engine.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stdin_eof_waits_for_pending_reveal() {
        let mut engine = engine_at(Section::Rest);
        let mut events = engine.subscribe();
        let (input_tx, mut input_rx) = mpsc::channel(8);

        input_tx
            .send(StdinInput::Command(Message::SendRequest))
            .await
            .expect("channel open");
        drop(input_tx);

        tokio::time::timeout(
            Duration::from_secs(5),
            headless_event_loop(&mut engine, &mut events, &mut input_rx),
        )
        .await
        .expect("loop ends once the reveal lands")
        .expect("loop ends cleanly");

        assert!(!engine.should_quit());
        assert!(!engine.state.rest.is_in_flight());
        assert!(engine.state.rest.response().is_some());
    }

    #[tokio::test]
    async fn test_stdin_eof_with_nothing_pending_ends_loop() {
        let mut engine = engine_at(Section::Intro);
        let mut events = engine.subscribe();
        let (input_tx, mut input_rx) = mpsc::channel::<StdinInput>(8);
        drop(input_tx);

        headless_event_loop(&mut engine, &mut events, &mut input_rx)
            .await
            .expect("loop ends cleanly");
        assert!(!engine.should_quit());
    }
}
