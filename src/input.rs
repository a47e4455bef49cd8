//! Keyboard handling for the game loop.
//!
//! Events are drained once per tick; anything that arrives between ticks is
//! folded into a single [`TickInput`].

use crate::game::TickInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap while playing, restart after a crash (Space, Up or Enter).
    Action,
    /// Leave the game (Esc, q or Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// Map a key event to a game input. Only presses count; releases and
/// repeats reported by some terminals are ignored.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            GameInput::Quit
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Action,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Fold a batch of terminal events into one tick's input.
pub fn collect_tick_input<I>(events: I) -> TickInput
where
    I: IntoIterator<Item = Event>,
{
    let mut input = TickInput::default();
    for event in events {
        if let Event::Key(key) = event {
            match map_key(key) {
                GameInput::Action => input.action = true,
                GameInput::Quit => input.quit = true,
                GameInput::Other => {}
            }
        }
    }
    input
}

/// Drain every pending terminal event without blocking.
pub fn poll_tick_input() -> io::Result<TickInput> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(collect_tick_input(events))
}
