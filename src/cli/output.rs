//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use bookrate::{BookrateError, RenderedRating};
use serde::Serialize;

/// Result of applying widget operations, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Name of the host field.
    pub field: String,
    /// Text the host field would submit.
    pub value: String,
    /// What the widget displays.
    #[serde(flatten)]
    pub rendered: RenderedRating,
}

/// Writes a rating summary as text or JSON.
pub fn write_rating_summary<W: Write>(
    writer: &mut W,
    summary: &RatingSummary,
    json: bool,
) -> Result<(), BookrateError> {
    if json {
        return write_json(writer, summary);
    }

    let stars = summary
        .rendered
        .star_fills
        .iter()
        .map(|fill| format!("{:.0}%", fill.percent()))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        writer,
        "{}: {} ({})",
        summary.field, summary.value, summary.rendered.text_label
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "stars: {stars}").map_err(|e| io_error(&e))
}

/// Writes the value saved from the terminal editor, if any.
pub fn write_submitted<W: Write>(
    writer: &mut W,
    field: &str,
    value: Option<&str>,
    json: bool,
) -> Result<(), BookrateError> {
    if json {
        #[derive(Serialize)]
        struct Submitted<'a> {
            field: &'a str,
            value: Option<&'a str>,
        }
        return write_json(writer, &Submitted { field, value });
    }

    let written = match value {
        Some(saved) => writeln!(writer, "{field}: {saved}"),
        None => writeln!(writer, "{field}: not saved"),
    };
    written.map_err(|e| io_error(&e))
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), BookrateError> {
    let serialised = serde_json::to_string(value).map_err(|error| BookrateError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer, "{serialised}").map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`BookrateError::Io`].
pub fn io_error(error: &io::Error) -> BookrateError {
    BookrateError::Io {
        message: error.to_string(),
    }
}
