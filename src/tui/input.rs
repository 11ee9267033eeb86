//! Input handling for the TUI application.
//!
//! Keys mean different things depending on whether the inline editor is
//! open: digits click stars while the label is displayed, and are typed into
//! the editor while editing.

use crossterm::event::KeyCode;

use super::messages::AppMsg;
use crate::widget::{EditorKey, UiEvent};

/// Which surface has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Stars and the numeric label are shown.
    Display,
    /// The inline editor is open.
    Edit,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Display => map_display_key(key.key),
        InputContext::Edit => map_edit_key(key.key),
    }
}

fn map_display_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(ch @ '1'..='5') => {
            star_position(ch).map(|position| AppMsg::Widget(UiEvent::StarClicked(position)))
        }
        KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::CursorRight),
        KeyCode::Char(' ') => Some(AppMsg::ApplyCursor),
        KeyCode::Enter | KeyCode::Char('e') => Some(AppMsg::Widget(UiEvent::ValueLabelClicked)),
        KeyCode::Char('s') => Some(AppMsg::Submit),
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        _ => None,
    }
}

fn map_edit_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::Widget(UiEvent::EditorKey(EditorKey::Enter))),
        KeyCode::Tab | KeyCode::Esc => Some(AppMsg::Widget(UiEvent::EditorBlurred)),
        KeyCode::Backspace => Some(AppMsg::EditorBackspace),
        KeyCode::Char(ch) => Some(AppMsg::EditorChar(ch)),
        _ => None,
    }
}

/// Zero-based star position for a digit key.
const fn star_position(ch: char) -> Option<usize> {
    match ch {
        '1' => Some(0),
        '2' => Some(1),
        '3' => Some(2),
        '4' => Some(3),
        '5' => Some(4),
        _ => None,
    }
}
