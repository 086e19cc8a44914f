//! Keyboard snapshot assembly for the frame pump.
//!
//! Terminals deliver key events rather than key state, so the per-frame
//! snapshot marks a key down when a press (or auto-repeat) event for it
//! arrived that frame. Edge detection against the previous snapshot lives
//! in `game_logic::step`.

use crate::game_state::InputSnapshot;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Fold one key event into the frame's snapshot.
pub fn apply_key_event(snapshot: &mut InputSnapshot, key: KeyEvent) {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return;
    }

    match key.code {
        KeyCode::Char(' ') => snapshot.move_down = true,
        KeyCode::Enter => snapshot.confirm_down = true,
        KeyCode::Esc => snapshot.exit_down = true,
        _ => {}
    }
}
