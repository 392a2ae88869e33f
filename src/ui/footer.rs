use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_DIM};
use crate::ui::wizard::WizardView;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Back / Next / Reset controls plus key hints.
pub struct NavigationBar;

impl NavigationBar {
    /// `typing` drops the letter shortcuts a text-entry step swallows.
    pub fn widget(view: &WizardView<'_>, typing: bool, area: Rect) -> Paragraph<'static> {
        let primary = Style::default().fg(TEXT).bg(ACCENT).add_modifier(Modifier::BOLD);
        let enabled = Style::default().fg(TEXT);
        let disabled = Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM);
        let hint_style = Style::default().fg(TEXT_DIM);

        let (mut spans, hints) = match view {
            WizardView::Step {
                back_enabled,
                next_label,
                ..
            } => (
                vec![
                    Span::styled(
                        " Back ",
                        if *back_enabled { enabled } else { disabled },
                    ),
                    Span::raw("   "),
                    Span::styled(format!(" {} ", next_label), primary),
                ],
                if typing {
                    "  ←: Back │ →/Tab: Next │ Esc: Quit"
                } else {
                    "  ←/b: Back │ →/n/Tab: Next │ Esc/q: Quit"
                },
            ),
            WizardView::Completed => (
                vec![Span::styled(" Reset ", primary)],
                "  r/Enter: Reset │ Esc/q: Quit",
            ),
        };

        let version = format!("v{} ", VERSION);
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum::<usize>()
            + hints.chars().count()
            + version.chars().count();
        // minus borders
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        spans.push(Span::styled(hints, hint_style));
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, hint_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
