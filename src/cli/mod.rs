//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`scripted`]: Apply a configured star click and edit, then print
//! - [`rating_tui`]: Interactive TUI for editing the rating
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod rating_tui;
pub mod scripted;
