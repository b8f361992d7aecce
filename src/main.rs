//! Terminal ten-pair runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based diff renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tenpair::core::GameState;
use tui_tenpair::feedback::TerminalBell;
use tui_tenpair::store::ProgressStore;
use tui_tenpair::term::{TerminalRenderer, Viewport};
use tui_tenpair::types::TICK_MS;
use tui_tenpair::ui::{handle_key_event, should_quit, App};

fn main() -> Result<()> {
    let store = ProgressStore::open_default()?;
    let mut app = App::new(GameState::from_entropy(), store, TerminalBell);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App<TerminalBell>) -> Result<()> {
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = app.render(Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
