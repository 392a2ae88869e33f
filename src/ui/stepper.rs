use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STEP_DONE, TEXT, TEXT_DIM};
use crate::ui::wizard::{step_progress, StepId, StepProgress, WizardState};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Progress indicator across the top of the screen.
pub struct Stepper;

impl Stepper {
    pub fn widget(state: &WizardState) -> Paragraph<'static> {
        let separator_style = Style::default().fg(TEXT_DIM);
        let mut spans = Vec::new();
        for (idx, step) in StepId::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ──  ", separator_style));
            }
            let (marker, style) = match step_progress(state, *step) {
                StepProgress::Done => ("✔", Style::default().fg(STEP_DONE)),
                StepProgress::Active => (
                    "●",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                StepProgress::Pending => ("○", Style::default().fg(TEXT_DIM)),
            };
            spans.push(Span::styled(format!("{} ", marker), style));
            let label_style = if matches!(step_progress(state, *step), StepProgress::Pending) {
                Style::default().fg(TEXT_DIM)
            } else {
                Style::default().fg(TEXT)
            };
            spans.push(Span::styled(step.label(), label_style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
