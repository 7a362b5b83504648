//! Interactive terminal front end.
//!
//! Drives the selector on stderr with `crossterm`: raw mode and the alternate
//! screen are entered for the session and restored by [`TerminalGuard`] on
//! every exit path, including errors and panics unwinding through the loop.
//! Stdout is never written to here; it is reserved for the emitted script.

use crate::app::{handle_event, AppState, Event, Outcome};
use crate::domain::{Result, TriesError};
use crate::ui::render;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use std::io::{self, Write};

/// Restores the terminal when dropped.
#[derive(Debug)]
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enters raw mode and the alternate screen on stderr.
    ///
    /// # Errors
    ///
    /// Returns [`TriesError::Terminal`] if stderr is not a usable terminal.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(terminal_err)?;
        let guard = Self;
        execute!(io::stderr(), EnterAlternateScreen, Hide).map_err(terminal_err)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn terminal_err(e: io::Error) -> TriesError {
    TriesError::Terminal(e.to_string())
}

/// Maps a key press to a selector event. Unbound keys map to `None`.
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => Some(Event::Up),
        KeyCode::Down => Some(Event::Down),
        KeyCode::Enter => Some(Event::Confirm),
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Esc => Some(Event::Cancel),
        KeyCode::Char('p') if ctrl => Some(Event::Up),
        KeyCode::Char('n') if ctrl => Some(Event::Down),
        KeyCode::Char('d') if ctrl => Some(Event::DeleteRequest),
        KeyCode::Char('c') if ctrl => Some(Event::Cancel),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(Event::Char(c)),
        _ => None,
    }
}

/// Maps any terminal event to a selector event.
#[must_use]
pub fn map_event(event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => map_key(key),
        TermEvent::Resize(cols, rows) => Some(Event::Resize {
            rows: usize::from(*rows),
            cols: usize::from(*cols),
        }),
        _ => None,
    }
}

/// Runs the selector until it produces an [`Outcome`].
///
/// # Errors
///
/// Returns [`TriesError::Terminal`] if the terminal cannot be set up, read
/// from or drawn to.
pub fn run_selector(mut state: AppState) -> Result<Outcome> {
    let _span = tracing::debug_span!("run_selector", root = %state.root.display()).entered();

    let _guard = TerminalGuard::enter()?;
    let mut stderr = io::stderr();

    if let Ok((cols, rows)) = terminal::size() {
        state.rows = usize::from(rows);
        state.cols = usize::from(cols);
    }
    draw(&mut stderr, &state)?;

    loop {
        let raw = event::read().map_err(terminal_err)?;
        let Some(event) = map_event(&raw) else {
            continue;
        };

        let (should_render, outcome) = handle_event(&mut state, &event);
        if let Some(outcome) = outcome {
            tracing::info!(outcome = ?outcome, "selector finished");
            return Ok(outcome);
        }
        if should_render {
            draw(&mut stderr, &state)?;
        }
    }
}

fn draw(out: &mut impl Write, state: &AppState) -> Result<()> {
    out.write_all(render(state).as_bytes()).map_err(terminal_err)?;
    out.flush().map_err(terminal_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn arrows_and_emacs_keys_navigate() {
        assert_eq!(map_key(&press(KeyCode::Up, KeyModifiers::NONE)), Some(Event::Up));
        assert_eq!(map_key(&press(KeyCode::Char('p'), KeyModifiers::CONTROL)), Some(Event::Up));
        assert_eq!(map_key(&press(KeyCode::Down, KeyModifiers::NONE)), Some(Event::Down));
        assert_eq!(map_key(&press(KeyCode::Char('n'), KeyModifiers::CONTROL)), Some(Event::Down));
    }

    #[test]
    fn control_keys_map_to_commands() {
        assert_eq!(map_key(&press(KeyCode::Enter, KeyModifiers::NONE)), Some(Event::Confirm));
        assert_eq!(
            map_key(&press(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(Event::DeleteRequest)
        );
        assert_eq!(map_key(&press(KeyCode::Esc, KeyModifiers::NONE)), Some(Event::Cancel));
        assert_eq!(map_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Event::Cancel));
        assert_eq!(map_key(&press(KeyCode::Backspace, KeyModifiers::NONE)), Some(Event::Backspace));
    }

    #[test]
    fn printable_characters_are_typed() {
        assert_eq!(map_key(&press(KeyCode::Char('a'), KeyModifiers::NONE)), Some(Event::Char('a')));
        assert_eq!(map_key(&press(KeyCode::Char('A'), KeyModifiers::SHIFT)), Some(Event::Char('A')));
        assert_eq!(map_key(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), None);
    }

    #[test]
    fn resize_carries_rows_and_cols() {
        assert_eq!(
            map_event(&TermEvent::Resize(100, 30)),
            Some(Event::Resize { rows: 30, cols: 100 })
        );
    }
}
