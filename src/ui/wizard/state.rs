use crate::ui::mvi::UiState;
use crate::ui::wizard::steps::{StepId, STEP_COUNT};

/// Selection used when neither config nor CLI supplies one.
pub const DEFAULT_SELECTION: &str = "basic";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// Zero-based index of the visible step, `STEP_COUNT` once finished.
    pub active_step: usize,
    /// DNA assembly method shared by every step view.
    pub selection: String,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::with_selection(DEFAULT_SELECTION)
    }
}

impl UiState for WizardState {}

impl WizardState {
    pub fn with_selection(selection: impl Into<String>) -> Self {
        Self {
            active_step: 0,
            selection: selection.into(),
        }
    }

    pub fn step_count(&self) -> usize {
        STEP_COUNT
    }

    pub fn current_step(&self) -> Option<StepId> {
        StepId::from_index(self.active_step)
    }

    pub fn is_completed(&self) -> bool {
        self.active_step >= STEP_COUNT
    }

    pub fn is_last_step(&self) -> bool {
        self.active_step.saturating_add(1) == STEP_COUNT
    }

    pub fn back_enabled(&self) -> bool {
        self.active_step > 0 && !self.is_completed()
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last_step() {
            "Finish"
        } else {
            "Next"
        }
    }
}
