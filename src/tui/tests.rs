//! Tests for the rating editor application.

use bubbletea_rs::Model;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};

use super::*;
use crate::rating::{Rating, StarIndex};
use crate::widget::{EditorKey, UiEvent};

fn key(code: KeyCode) -> Box<dyn std::any::Any + Send> {
    Box::new(bubbletea_rs::event::KeyMsg {
        key: code,
        modifiers: KeyModifiers::empty(),
    })
}

fn press_all(app: &mut RatingApp, codes: &[KeyCode]) {
    for code in codes {
        let _cmd = app.update(key(*code));
    }
}

#[fixture]
fn app() -> RatingApp {
    RatingApp::new("2.5")
}

#[rstest]
fn starts_from_the_host_field(app: RatingApp) {
    assert_eq!(app.rating(), Rating::clamped(2.5));
    assert_eq!(app.field_value(), "2.5");
    assert!(app.view().contains("Rating: 2.5 (Good)"));
}

#[test]
fn unparseable_initial_text_starts_at_zero() {
    let app = RatingApp::new("n/a");
    assert_eq!(app.field_value(), "0.0");
    assert!(app.view().contains("(No rating)"));
}

#[rstest]
fn digit_keys_click_stars(mut app: RatingApp) {
    press_all(&mut app, &[KeyCode::Char('4')]);
    assert_eq!(app.field_value(), "4.0");
}

#[rstest]
fn cursor_selects_and_applies_a_star(mut app: RatingApp) {
    press_all(
        &mut app,
        &[KeyCode::Right, KeyCode::Right, KeyCode::Left, KeyCode::Char(' ')],
    );
    assert_eq!(app.cursor().ordinal(), 2);
    assert_eq!(app.field_value(), "2.0");
}

#[rstest]
fn cursor_stays_on_the_stars(mut app: RatingApp) {
    press_all(&mut app, &[KeyCode::Left]);
    assert_eq!(app.cursor(), StarIndex::FIRST);
    press_all(&mut app, &[KeyCode::Right; 9]);
    assert_eq!(app.cursor(), StarIndex::LAST);
}

#[rstest]
fn typed_value_is_committed_on_enter(mut app: RatingApp) {
    press_all(&mut app, &[KeyCode::Char('e')]);
    assert!(app.is_editing());
    assert_eq!(app.input_context(), input::InputContext::Edit);

    press_all(
        &mut app,
        &[
            KeyCode::Backspace,
            KeyCode::Backspace,
            KeyCode::Backspace,
            KeyCode::Char('4'),
            KeyCode::Char('.'),
            KeyCode::Char('8'),
        ],
    );
    assert!(app.view().contains("Rating: [4.8_]"), "{}", app.view());

    press_all(&mut app, &[KeyCode::Enter]);
    assert!(!app.is_editing());
    assert_eq!(app.field_value(), "4.8");
}

#[rstest]
fn digits_are_text_while_editing(mut app: RatingApp) {
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Char('1'), KeyCode::Tab]);
    assert_eq!(app.rating(), Rating::clamped(2.51));
    assert_eq!(app.field_value(), "2.5");
}

#[rstest]
fn blurring_an_emptied_editor_commits_zero(mut app: RatingApp) {
    press_all(
        &mut app,
        &[
            KeyCode::Enter,
            KeyCode::Backspace,
            KeyCode::Backspace,
            KeyCode::Backspace,
            KeyCode::Esc,
        ],
    );
    assert_eq!(app.field_value(), "0.0");
    assert_eq!(app.input_context(), input::InputContext::Display);
}

#[rstest]
fn editor_messages_are_ignored_while_displaying(mut app: RatingApp) {
    let _cmd = app.handle_message(&messages::AppMsg::EditorChar('9'));
    let _cmd = app.handle_message(&messages::AppMsg::Widget(UiEvent::EditorKey(
        EditorKey::Enter,
    )));
    assert_eq!(app.field_value(), "2.5");
}

#[rstest]
fn resize_updates_the_viewport(mut app: RatingApp) {
    let _cmd = app.handle_message(&messages::AppMsg::WindowResized {
        width: 12,
        height: 20,
    });
    assert_eq!(app.size(), (12, 20));
    assert!(app.view().lines().all(|line| line.chars().count() <= 12));
}

#[rstest]
fn submit_stores_the_field_and_quits(mut app: RatingApp) {
    press_all(&mut app, &[KeyCode::Char('5')]);
    let cmd = app.handle_message(&messages::AppMsg::Submit);
    assert!(cmd.is_some());
    assert_eq!(take_submitted_rating().as_deref(), Some("5.0"));
    assert_eq!(take_submitted_rating(), None);
}

#[rstest]
fn quit_returns_a_command(mut app: RatingApp) {
    assert!(app.handle_message(&messages::AppMsg::Quit).is_some());
}
