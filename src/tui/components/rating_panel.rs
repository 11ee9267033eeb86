//! Terminal rendering of the rating widget.
//!
//! [`RatingPanel`] is the [`RatingView`] the terminal front end injects into
//! the widget. It stores what the widget pushes and draws it as plain text:
//! a star row, the fill percentage under each star, the numeric and
//! descriptive labels, and a key hint line.

use unicode_width::UnicodeWidthChar;

use crate::rating::{STAR_COUNT, StarFill, StarIndex};
use crate::widget::RatingView;

const TITLE: &str = "Rate this book";
const FULL_STAR: char = '★';
const PARTIAL_STAR: char = '◐';
const EMPTY_STAR: char = '☆';
const EDITOR_CURSOR: char = '_';
const DISPLAY_HINT: &str = "1-5 rate  left/right select  space apply  e edit  s save  q quit";
const EDIT_HINT: &str = "type a value  enter/tab save";

/// Rendering context supplied by the application on each frame.
#[derive(Debug, Clone, Copy)]
pub struct RatingPanelContext<'a> {
    /// Star highlighted for keyboard selection.
    pub cursor: StarIndex,
    /// Editor text while the numeric label is being edited.
    pub draft: Option<&'a str>,
    /// Terminal width in columns; zero disables truncation.
    pub max_width: usize,
}

/// Star rating panel for the terminal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingPanel {
    star_fills: [StarFill; STAR_COUNT],
    value_label: String,
    text_label: String,
    editor_open: bool,
}

impl RatingPanel {
    /// Returns true while the editor replaces the numeric label.
    #[must_use]
    pub const fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    /// Renders the panel as newline-separated lines.
    #[must_use]
    pub fn view(&self, ctx: &RatingPanelContext<'_>) -> String {
        let value = match (self.editor_open, ctx.draft) {
            (true, Some(draft)) => format!("[{draft}{EDITOR_CURSOR}]"),
            (true, None) => format!("[{EDITOR_CURSOR}]"),
            (false, _) => self.value_label.clone(),
        };
        let hint = if self.editor_open {
            EDIT_HINT
        } else {
            DISPLAY_HINT
        };
        let lines = [
            TITLE.to_owned(),
            String::new(),
            self.star_row(ctx.cursor),
            self.percent_row(),
            String::new(),
            format!("Rating: {value} ({})", self.text_label),
            String::new(),
            hint.to_owned(),
        ];

        lines
            .iter()
            .map(|line| fit_line(line.trim_end(), ctx.max_width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn star_row(&self, cursor: StarIndex) -> String {
        StarIndex::all()
            .into_iter()
            .zip(self.star_fills)
            .map(|(index, fill)| {
                let glyph = star_glyph(fill);
                if index == cursor {
                    format!("[{glyph}]")
                } else {
                    format!(" {glyph} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn percent_row(&self) -> String {
        self.star_fills
            .iter()
            .map(|fill| format!("{:>3.0}", fill.percent()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RatingView for RatingPanel {
    fn set_star_fill(&mut self, index: StarIndex, fill: StarFill) {
        if let Some(slot) = self.star_fills.get_mut(index.position()) {
            *slot = fill;
        }
    }

    fn set_value_label(&mut self, text: &str) {
        text.clone_into(&mut self.value_label);
    }

    fn set_text_label(&mut self, text: &str) {
        text.clone_into(&mut self.text_label);
    }

    fn open_editor(&mut self, _draft: &str) {
        self.editor_open = true;
    }

    fn close_editor(&mut self) {
        self.editor_open = false;
    }
}

fn star_glyph(fill: StarFill) -> char {
    if fill.is_full() {
        FULL_STAR
    } else if fill.is_empty() {
        EMPTY_STAR
    } else {
        PARTIAL_STAR
    }
}

/// Truncates `line` to `max_width` display columns.
fn fit_line(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return line.to_owned();
    }
    let mut used = 0;
    line.chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= max_width
        })
        .collect()
}
