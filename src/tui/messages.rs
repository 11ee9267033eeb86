//! Message types for the TUI update loop.

use crate::widget::UiEvent;

/// Messages for the rating editor application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Widget
    /// Forward a UI event to the rating widget.
    Widget(UiEvent),
    /// Append a character to the editor text.
    EditorChar(char),
    /// Delete the last character of the editor text.
    EditorBackspace,

    // Star selection
    /// Move the star cursor left.
    CursorLeft,
    /// Move the star cursor right.
    CursorRight,
    /// Click the star under the cursor.
    ApplyCursor,

    // Application lifecycle
    /// Hand the field value to the caller and quit.
    Submit,
    /// Quit without submitting.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
