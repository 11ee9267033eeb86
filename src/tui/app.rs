//! Rating editor application model.
//!
//! [`RatingApp`] owns a [`RatingWidget`] drawing into a [`RatingPanel`] and
//! translates terminal input into widget events.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::components::{RatingPanel, RatingPanelContext};
use super::input::{InputContext, map_key_to_message_with_context};
use super::messages::AppMsg;
use crate::rating::{Rating, StarIndex};
use crate::widget::{Dispatch, HiddenField, RatingWidget, UiEvent, WidgetMode, dispatch};

/// Name of the form field the editor publishes into.
pub const RATING_FIELD_NAME: &str = "rating";

const DEFAULT_WIDTH: u16 = 80;

/// Interactive rating editor.
#[derive(Debug)]
pub struct RatingApp {
    widget: RatingWidget<RatingPanel, HiddenField>,
    cursor: StarIndex,
    width: u16,
    height: u16,
}

impl RatingApp {
    /// Creates the editor with the host field pre-populated by `initial`.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let field = HiddenField::new(RATING_FIELD_NAME, initial);
        Self {
            widget: RatingWidget::attach(RatingPanel::default(), field),
            cursor: StarIndex::FIRST,
            width: DEFAULT_WIDTH,
            height: 0,
        }
    }

    /// Returns the current rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.widget.value()
    }

    /// Returns the text currently held by the host field.
    #[must_use]
    pub fn field_value(&self) -> &str {
        self.widget.field().value()
    }

    /// Returns the star under the keyboard cursor.
    #[must_use]
    pub const fn cursor(&self) -> StarIndex {
        self.cursor
    }

    /// Returns true while the inline editor is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.widget.is_editing()
    }

    /// Returns the last reported terminal size as `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Returns the current input context for context-aware key mapping.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.widget.is_editing() {
            InputContext::Edit
        } else {
            InputContext::Display
        }
    }

    /// Handles an application message.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Widget(event) => {
                self.forward(event);
                None
            }
            AppMsg::EditorChar(ch) => {
                self.edit_draft(|draft| draft.push(*ch));
                None
            }
            AppMsg::EditorBackspace => {
                self.edit_draft(|draft| {
                    draft.pop();
                });
                None
            }
            AppMsg::CursorLeft => {
                self.cursor = self.cursor.previous();
                None
            }
            AppMsg::CursorRight => {
                self.cursor = self.cursor.next();
                None
            }
            AppMsg::ApplyCursor => {
                self.forward(&UiEvent::StarClicked(self.cursor.position()));
                None
            }
            AppMsg::Submit => {
                super::store_submitted_rating(self.field_value());
                Some(bubbletea_rs::quit())
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
        }
    }

    fn forward(&mut self, event: &UiEvent) {
        let outcome = dispatch(&mut self.widget, event);
        if outcome == Dispatch::Changed {
            tracing::debug!("rating changed to {}", self.widget.value());
        }
    }

    fn edit_draft(&mut self, change: impl FnOnce(&mut String)) {
        if let WidgetMode::Edit { draft } = self.widget.mode() {
            let mut next = draft.clone();
            change(&mut next);
            self.forward(&UiEvent::EditorInput(next));
        }
    }
}

impl Model for RatingApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the pre-populated field text from module-level storage
        let initial = super::get_initial_rating();
        (Self::new(&initial), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        let draft = match self.widget.mode() {
            WidgetMode::Display => None,
            WidgetMode::Edit { draft } => Some(draft.as_str()),
        };
        let ctx = RatingPanelContext {
            cursor: self.cursor,
            draft,
            max_width: usize::from(self.width),
        };
        self.widget.view().view(&ctx)
    }
}
