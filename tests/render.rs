//! Whole-frame rendering against ratatui's TestBackend.

mod common;

use assembly_designer::ui::input::handle_key;
use assembly_designer::ui::wizard::{WizardIntent, STEP_COUNT};
use common::*;
use crossterm::event::KeyCode;

#[test]
fn first_frame_shows_stepper_and_designer() {
    let app = make_app();
    let screen = render_to_string(&app, 100, 24);
    assert!(screen.contains("SBOL Designer"));
    assert!(screen.contains("SBOL File Upload"));
    assert!(screen.contains("Specifications"));
    assert!(screen.contains("Choose a DNA assembly method"));
    assert!(screen.contains("(•) basic"));
    assert!(screen.contains("Back"));
    assert!(screen.contains("Next"));
    assert!(!screen.contains("Finish"));
}

#[test]
fn last_step_renders_finish_and_read_only_selection() {
    let mut app = make_app();
    app.dispatch(WizardIntent::SetSelection("moclo".into()));
    app.dispatch(WizardIntent::Advance);
    app.dispatch(WizardIntent::Advance);
    let screen = render_to_string(&app, 100, 24);
    assert!(screen.contains("Finish"));
    assert!(screen.contains("DNA assembly: moclo"));
}

#[test]
fn custom_selection_is_shown_in_designer() {
    let mut app = make_app();
    app.dispatch(WizardIntent::SetSelection("gibson".into()));
    let screen = render_to_string(&app, 100, 24);
    assert!(screen.contains("Custom: gibson"));
}

#[test]
fn completion_frame_offers_reset() {
    let mut app = make_app();
    for _ in 0..STEP_COUNT {
        app.dispatch(WizardIntent::Advance);
    }
    let screen = render_to_string(&app, 100, 24);
    assert!(screen.contains("All steps completed"));
    assert!(screen.contains("Reset"));
    assert!(!screen.contains("Finish"));
}

#[test]
fn upload_step_hints_omit_letter_shortcuts() {
    let mut app = make_app();
    app.dispatch(WizardIntent::Advance);
    let screen = render_to_string(&app, 100, 24);
    assert!(screen.contains("→/Tab: Next"));
    assert!(!screen.contains("←/b"));
    assert!(!screen.contains("Esc/q"));
}

#[test]
fn letter_shortcut_hints_on_other_steps() {
    let app = make_app();
    let screen = render_to_string(&app, 100, 24);
    assert!(screen.contains("←/b: Back"));
    assert!(screen.contains("→/n/Tab: Next"));
}

#[test]
fn unapplied_upload_text_is_marked() {
    let mut app = make_app();
    app.dispatch(WizardIntent::Advance);
    handle_key(&mut app, press_key(KeyCode::Char('z')));
    let screen = render_to_string(&app, 100, 24);
    assert!(screen.contains("basicz_  (not applied)"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = make_app();
    let _ = render_to_string(&app, 4, 2);
}
