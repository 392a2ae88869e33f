use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::panels::StepPanel;
use crate::ui::theme::{ACCENT, TEXT, TEXT_DIM};
use crate::ui::wizard::StepId;

/// Free-form entry of the assembly method used for uploaded designs.
#[derive(Default)]
pub struct UploadPanel {
    input: String,
}

impl UploadPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Typed value that differs from `selection` and has not been applied.
    fn pending(&self, selection: &str) -> Option<String> {
        let value = self.input.trim();
        (!value.is_empty() && value != selection).then(|| value.to_string())
    }
}

impl StepPanel for UploadPanel {
    fn step(&self) -> StepId {
        StepId::FileUpload
    }

    fn lines(&self, selection: &str) -> Vec<Line<'static>> {
        let mut input_spans = vec![
            Span::styled("  > ", Style::default().fg(ACCENT)),
            Span::styled(self.input.clone(), Style::default().fg(TEXT)),
            Span::styled("_", Style::default().fg(ACCENT)),
        ];
        if self.pending(selection).is_some() {
            input_spans.push(Span::styled(
                "  (not applied)",
                Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
            ));
        }
        vec![
            Line::from(Span::styled(
                "DNA assembly for uploaded SBOL files",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(input_spans),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Current selection: ", Style::default().fg(TEXT_DIM)),
                Span::styled(selection.to_string(), Style::default().fg(TEXT)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Type to edit  Backspace: Delete  Enter: Apply (also applied on leaving)",
                Style::default().fg(TEXT_DIM),
            )),
        ]
    }

    fn on_key(&mut self, key: KeyEvent, _selection: &str) -> Option<String> {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(ch);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Enter => {
                let value = self.input.trim();
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            _ => None,
        }
    }

    fn on_enter(&mut self, selection: &str) {
        self.input = selection.to_string();
    }

    fn on_leave(&mut self, selection: &str) -> Option<String> {
        self.pending(selection)
    }

    fn captures_text(&self) -> bool {
        true
    }
}
