//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.bookrate.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `BOOKRATE_RATING`, `BOOKRATE_STAR`,
//!    `BOOKRATE_EDIT`
//! 4. **Command-line arguments** – `--rating`/`-r`, `--star`/`-s`,
//!    `--edit`/`-e`, `--tui`/`-T`, `--json`/`-j`
//!
//! # Configuration File
//!
//! ```toml
//! rating = "3.5"
//! json = true
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::BookrateError;
use crate::rating::{STAR_COUNT, StarIndex};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Apply the configured star click and edit, then print the result.
    Scripted,
    /// Edit the rating in the terminal UI.
    Interactive,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use bookrate::BookrateConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = BookrateConfig::load().expect("failed to load configuration");
/// let initial = config.initial_field_text();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BOOKRATE",
    discovery(
        dotfile_name = ".bookrate.toml",
        config_file_name = "bookrate.toml",
        app_name = "bookrate"
    )
)]
pub struct BookrateConfig {
    /// Pre-existing rating the host field starts with.
    ///
    /// Any text is accepted: values that do not parse as a number start the
    /// widget at zero, and out-of-range values are clamped.
    ///
    /// Can be provided via:
    /// - CLI: `--rating <VALUE>` or `-r <VALUE>`
    /// - Environment: `BOOKRATE_RATING`
    /// - Config file: `rating = "..."`
    #[ortho_config(cli_short = 'r')]
    pub rating: Option<String>,

    /// One-based star to click (1 to 5).
    ///
    /// Can be provided via:
    /// - CLI: `--star <N>` or `-s <N>`
    /// - Environment: `BOOKRATE_STAR`
    /// - Config file: `star = 4`
    #[ortho_config(cli_short = 's')]
    pub star: Option<u8>,

    /// Text to type into the numeric editor, committed after any star click.
    ///
    /// Can be provided via:
    /// - CLI: `--edit <TEXT>` or `-e <TEXT>`
    /// - Environment: `BOOKRATE_EDIT`
    /// - Config file: `edit = "..."`
    #[ortho_config(cli_short = 'e')]
    pub edit: Option<String>,

    /// Launches the interactive terminal editor.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Prints the result as JSON instead of text.
    ///
    /// Can be provided via:
    /// - CLI: `--json` / `-j`
    /// - Config file: `json = true`
    #[ortho_config(cli_short = 'j')]
    pub json: bool,
}

impl BookrateConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::Interactive
        } else {
            OperationMode::Scripted
        }
    }

    /// Returns the host field's initial text, empty when no rating is set.
    #[must_use]
    pub fn initial_field_text(&self) -> &str {
        self.rating.as_deref().unwrap_or_default()
    }

    /// Returns the zero-based star to click, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`BookrateError::InvalidStar`] when the configured star is not
    /// between 1 and 5.
    pub fn star_index(&self) -> Result<Option<StarIndex>, BookrateError> {
        let Some(star) = self.star else {
            return Ok(None);
        };
        usize::from(star)
            .checked_sub(1)
            .and_then(StarIndex::new)
            .map(Some)
            .ok_or(BookrateError::InvalidStar {
                star,
                max: STAR_COUNT,
            })
    }
}

#[cfg(test)]
mod tests;
