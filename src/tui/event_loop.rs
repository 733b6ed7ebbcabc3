//! Event loop - terminal setup, key dispatch, teardown.
//!
//! Strictly single-threaded: every state transition happens synchronously
//! in response to one key event. The poll timeout only bounds redraw
//! latency on resize; nothing runs between events.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use crate::view::Page;

use super::render::draw_ui;
use super::state::TuiState;

/// Run the interactive browser until the user quits.
pub fn run(tick_rate: Duration) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!("Failed to enable raw mode: {e}. Run folio in a real terminal (TTY).")
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to enter alternate screen: {e}")
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::default();
    let result = run_event_loop(&mut terminal, &mut state, tick_rate);

    // Always attempt to restore the terminal, even if the loop failed.
    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, state))?;

        if !event::poll(tick_rate)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match (key.code, key.modifiers) {
                // Quit
                (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
                    break;
                }
                // Menu button
                (KeyCode::Tab, _) | (KeyCode::Char('m'), _) => {
                    state.menu.press();
                }
                // Navigation links; activation always closes the menu
                (KeyCode::Char('h'), _) | (KeyCode::Char('1'), _) => {
                    state.activate_link(Page::Home);
                }
                (KeyCode::Char('t'), _) | (KeyCode::Char('2'), _) => {
                    state.activate_link(Page::Tools);
                }
                // Category strip
                (KeyCode::Left, _) => state.prev_category(),
                (KeyCode::Right, _) => state.next_category(),
                // Card cursor
                (KeyCode::Up, _) => state.cursor_up(),
                (KeyCode::Down, _) => state.cursor_down(),
                // Expand / collapse the focused card
                (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => {
                    state.toggle_focused();
                }
                // Body scrolling
                (KeyCode::PageUp, _) => state.scroll_up(page_step(terminal)),
                (KeyCode::PageDown, _) => state.scroll_down(page_step(terminal)),
                _ => {}
            }
        }
    }
    Ok(())
}

/// Half a screen, with a floor so tiny terminals still move.
fn page_step(terminal: &Terminal<CrosstermBackend<io::Stdout>>) -> usize {
    let height = terminal.size().map(|s| s.height).unwrap_or(24);
    std::cmp::max(5, height as usize / 2)
}
