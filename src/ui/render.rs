use crate::ui::app::App;
use crate::ui::footer::NavigationBar;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::stepper::Stepper;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STEP_DONE, TEXT_DIM};
use crate::ui::wizard::WizardView;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (stepper, body, nav) = layout_regions(frame.area());
    let view = app.view();

    frame.render_widget(Stepper::widget(app.wizard()), stepper);
    frame.render_widget(Clear, body);

    match &view {
        WizardView::Step { step, .. } => {
            let block = Block::default()
                .title(Span::styled(
                    format!(" {} ", step.label()),
                    Style::default().fg(ACCENT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER));
            let lines = app.panel_lines().unwrap_or_default();
            frame.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
                body,
            );
        }
        WizardView::Completed => {
            let lines = vec![
                Line::from(Span::styled(
                    "All steps completed",
                    Style::default().fg(STEP_DONE).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("DNA assembly: {}", app.wizard().selection),
                    Style::default().fg(TEXT_DIM),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                centered_rect(60, 30, body),
            );
        }
    }

    let typing = app.active_panel_captures_text();
    frame.render_widget(NavigationBar::widget(&view, typing, nav), nav);
}
