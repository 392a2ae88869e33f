use crossterm::event::KeyEvent;
use ratatui::text::Line;

use crate::config::Config;
use crate::ui::mvi::{dispatch, Reducer};
use crate::ui::panels::{default_panels, StepPanel};
use crate::ui::wizard::{StepId, WizardIntent, WizardReducer, WizardState, WizardView};

pub struct App {
    should_quit: bool,
    /// Wizard navigation and the shared selection (MVI pattern).
    wizard: WizardState,
    /// Step views, one per step.
    panels: Vec<Box<dyn StepPanel>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let panels = default_panels(&config.wizard.assembly_methods);
        Self::with_panels(
            WizardState::with_selection(config.wizard.default_selection.clone()),
            panels,
        )
    }

    pub fn with_panels(wizard: WizardState, panels: Vec<Box<dyn StepPanel>>) -> Self {
        let mut app = Self {
            should_quit: false,
            wizard,
            panels,
        };
        app.enter_current_step();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn view(&self) -> WizardView<'_> {
        WizardView::from_state(&self.wizard)
    }

    /// Run the wizard reducer. Panels hear about step changes, and a panel
    /// being left gets to apply its pending selection first.
    pub fn dispatch(&mut self, intent: WizardIntent) {
        let from = self.wizard.active_step;
        tracing::debug!(?intent, step = from, "Wizard intent");
        let leaving =
            WizardReducer::reduce(self.wizard.clone(), intent.clone()).active_step != from;
        if leaving {
            self.leave_current_step();
        }
        if !dispatch::<WizardReducer>(&mut self.wizard, intent) {
            return;
        }
        if self.wizard.active_step != from {
            tracing::debug!(from, to = self.wizard.active_step, "Wizard step changed");
            self.enter_current_step();
        }
    }

    /// Body lines for the active step, `None` once completed.
    pub fn panel_lines(&self) -> Option<Vec<Line<'static>>> {
        let step = self.wizard.current_step()?;
        self.panel(step)
            .map(|panel| panel.lines(&self.wizard.selection))
    }

    pub fn active_panel_captures_text(&self) -> bool {
        self.wizard
            .current_step()
            .and_then(|step| self.panel(step))
            .is_some_and(|panel| panel.captures_text())
    }

    /// Hand a key to the active step view and apply any selection it asks for.
    pub fn forward_to_panel(&mut self, key: KeyEvent) {
        let Some(step) = self.wizard.current_step() else {
            return;
        };
        let selection = self.wizard.selection.clone();
        let Some(panel) = self.panel_mut(step) else {
            return;
        };
        let Some(value) = panel.on_key(key, &selection) else {
            return;
        };
        if !step.edits_selection() {
            tracing::warn!(step = step.label(), "Read-only step tried to change selection");
            return;
        }
        self.dispatch(WizardIntent::SetSelection(value));
    }

    fn leave_current_step(&mut self) {
        let Some(step) = self.wizard.current_step() else {
            return;
        };
        let selection = self.wizard.selection.clone();
        let Some(value) = self.panel_mut(step).and_then(|panel| panel.on_leave(&selection))
        else {
            return;
        };
        if !step.edits_selection() {
            tracing::warn!(step = step.label(), "Read-only step tried to change selection");
            return;
        }
        tracing::debug!(step = step.label(), %value, "Applying selection on leave");
        dispatch::<WizardReducer>(&mut self.wizard, WizardIntent::SetSelection(value));
    }

    fn enter_current_step(&mut self) {
        let Some(step) = self.wizard.current_step() else {
            return;
        };
        let selection = self.wizard.selection.clone();
        if let Some(panel) = self.panel_mut(step) {
            panel.on_enter(&selection);
        }
    }

    fn panel(&self, step: StepId) -> Option<&dyn StepPanel> {
        self.panels
            .iter()
            .find(|panel| panel.step() == step)
            .map(|panel| &**panel)
    }

    fn panel_mut(&mut self, step: StepId) -> Option<&mut Box<dyn StepPanel>> {
        self.panels.iter_mut().find(|panel| panel.step() == step)
    }
}
