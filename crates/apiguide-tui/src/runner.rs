//! Main TUI runner - entry point and event loop
//!
//! Creates an Engine from apiguide-app and adds terminal rendering and
//! keyboard polling on top of it.

use apiguide_app::config::Settings;
use apiguide_app::Engine;
use apiguide_core::prelude::*;
use apiguide_core::Catalog;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the interactive guide until the user quits
pub async fn run(catalog: Catalog, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = terminal::init()?;

    let mut engine = Engine::new(catalog, settings);
    info!(
        "API Guide starting on section '{}'",
        engine.state.current_section().id()
    );

    let result = run_loop(&mut term, &mut engine);

    // Pending reveal timers must not outlive the UI
    engine.shutdown();

    terminal::restore();

    result
}

/// Drain engine messages, draw, then wait for the next key or tick
fn run_loop(terminal: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
