use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::panels::StepPanel;
use crate::ui::theme::{TEXT, TEXT_DIM};
use crate::ui::wizard::StepId;

/// Read-only summary of the design choices.
pub struct SpecificationPanel;

impl StepPanel for SpecificationPanel {
    fn step(&self) -> StepId {
        StepId::Specifications
    }

    fn lines(&self, selection: &str) -> Vec<Line<'static>> {
        let route = StepId::ALL
            .iter()
            .map(|step| step.label())
            .collect::<Vec<_>>()
            .join(" → ");
        vec![
            Line::from(Span::styled(
                "Specification",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  DNA assembly: ", Style::default().fg(TEXT_DIM)),
                Span::styled(selection.to_string(), Style::default().fg(TEXT)),
            ]),
            Line::from(vec![
                Span::styled("  Workflow:     ", Style::default().fg(TEXT_DIM)),
                Span::styled(route, Style::default().fg(TEXT)),
            ]),
        ]
    }

    fn on_key(&mut self, _key: KeyEvent, _selection: &str) -> Option<String> {
        None
    }
}
