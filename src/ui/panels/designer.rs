use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::panels::StepPanel;
use crate::ui::theme::{ACCENT, CURSOR_HIGHLIGHT, TEXT, TEXT_DIM};
use crate::ui::wizard::StepId;

/// Picker over the configured assembly methods.
pub struct DesignerPanel {
    methods: Vec<String>,
    cursor: usize,
}

impl DesignerPanel {
    pub fn new(methods: Vec<String>) -> Self {
        Self { methods, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn move_cursor(&mut self, direction: i32) {
        let len = self.methods.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1);
        self.cursor = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }
}

impl StepPanel for DesignerPanel {
    fn step(&self) -> StepId {
        StepId::SbolDesigner
    }

    fn lines(&self, selection: &str) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Choose a DNA assembly method",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (idx, method) in self.methods.iter().enumerate() {
            let marker = if method == selection { "(•)" } else { "( )" };
            let marker_style = if method == selection {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(TEXT_DIM)
            };
            let mut line = Line::from(vec![
                Span::raw("  "),
                Span::styled(marker, marker_style),
                Span::raw(" "),
                Span::styled(method.clone(), Style::default().fg(TEXT)),
            ]);
            if idx == self.cursor {
                line = line.style(Style::default().bg(CURSOR_HIGHLIGHT));
            }
            lines.push(line);
        }

        if !self.methods.iter().any(|m| m == selection) {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("  Custom: ", Style::default().fg(TEXT_DIM)),
                Span::styled(selection.to_string(), Style::default().fg(ACCENT)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Up/Down: Move  Space/Enter: Select",
            Style::default().fg(TEXT_DIM),
        )));
        lines
    }

    fn on_key(&mut self, key: KeyEvent, _selection: &str) -> Option<String> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.methods.get(self.cursor).cloned(),
            _ => None,
        }
    }

    fn on_enter(&mut self, selection: &str) {
        if let Some(pos) = self.methods.iter().position(|m| m == selection) {
            self.cursor = pos;
        }
    }
}
