use crate::ui::app::App;
use crate::ui::wizard::WizardIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.wizard().is_completed() {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => app.dispatch(WizardIntent::Reset),
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            _ => {}
        }
        return;
    }

    // Letter shortcuts yield to text entry
    let typing = app.active_panel_captures_text();
    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::Right => app.dispatch(WizardIntent::Advance),
        KeyCode::Left => app.dispatch(WizardIntent::Retreat),
        KeyCode::Char('q') if !typing => app.request_quit(),
        KeyCode::Char('n') if !typing => app.dispatch(WizardIntent::Advance),
        KeyCode::Char('b') if !typing => app.dispatch(WizardIntent::Retreat),
        _ => app.forward_to_panel(key),
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char(c) if c == ch)
}
