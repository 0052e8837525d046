//! Terminal input to session events, kept free of any terminal handle.

use crate::state::Event;
use crate::ui::input::QueryInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Session(Event),
    /// Only the query cursor moved; redraw, nothing for the session.
    CursorMoved,
    Ignored,
}

fn query_changed(input: &QueryInput, changed: bool) -> KeyAction {
    if changed {
        KeyAction::Session(Event::QueryChanged(input.text().to_string()))
    } else {
        KeyAction::Ignored
    }
}

/// Applies query edits to `input` and maps everything else to an event.
/// `page_size` is the number of visible list rows.
pub fn map_key(key: KeyEvent, input: &mut QueryInput, page_size: usize) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let page_size = page_size.max(1);
    match key.code {
        KeyCode::Esc => KeyAction::Session(Event::Cancel),
        KeyCode::Char('c' | 'd' | 'g') if ctrl => KeyAction::Session(Event::Cancel),
        KeyCode::Enter => KeyAction::Session(Event::Confirm),
        KeyCode::Up => KeyAction::Session(Event::Previous),
        KeyCode::Char('p' | 'k') if ctrl => KeyAction::Session(Event::Previous),
        KeyCode::Down => KeyAction::Session(Event::Next),
        KeyCode::Char('n' | 'j') if ctrl => KeyAction::Session(Event::Next),
        KeyCode::PageUp => KeyAction::Session(Event::PageUp(page_size)),
        KeyCode::PageDown => KeyAction::Session(Event::PageDown(page_size)),
        KeyCode::Char('u') if ctrl => {
            let changed = input.clear();
            query_changed(input, changed)
        }
        KeyCode::Char('w') if ctrl => {
            let changed = input.delete_word();
            query_changed(input, changed)
        }
        KeyCode::Backspace => {
            let changed = input.backspace();
            query_changed(input, changed)
        }
        KeyCode::Delete => {
            let changed = input.delete();
            query_changed(input, changed)
        }
        KeyCode::Left => {
            input.left();
            KeyAction::CursorMoved
        }
        KeyCode::Right => {
            input.right();
            KeyAction::CursorMoved
        }
        KeyCode::Home => {
            input.home();
            KeyAction::CursorMoved
        }
        KeyCode::Char('a') if ctrl => {
            input.home();
            KeyAction::CursorMoved
        }
        KeyCode::End => {
            input.end();
            KeyAction::CursorMoved
        }
        KeyCode::Char('e') if ctrl => {
            input.end();
            KeyAction::CursorMoved
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            let changed = input.insert(c);
            query_changed(input, changed)
        }
        _ => KeyAction::Ignored,
    }
}

/// Index of the live row under a pointer position, given the list area,
/// its scroll offset and the number of live rows.
pub fn row_at(list_area: Rect, offset: usize, row_count: usize, column: u16, row: u16) -> Option<usize> {
    if !list_area.contains(Position::new(column, row)) {
        return None;
    }
    let index = offset + usize::from(row - list_area.y);
    (index < row_count).then_some(index)
}
