use crate::ui::wizard::state::WizardState;
use crate::ui::wizard::steps::StepId;

/// What the body and navigation bar show for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardView<'a> {
    Step {
        step: StepId,
        selection: &'a str,
        back_enabled: bool,
        next_label: &'static str,
    },
    Completed,
}

impl<'a> WizardView<'a> {
    pub fn from_state(state: &'a WizardState) -> Self {
        match state.current_step() {
            Some(step) => WizardView::Step {
                step,
                selection: &state.selection,
                back_enabled: state.back_enabled(),
                next_label: state.next_label(),
            },
            None => WizardView::Completed,
        }
    }
}

/// Progress marker for one entry of the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepProgress {
    Done,
    Active,
    Pending,
}

pub fn step_progress(state: &WizardState, step: StepId) -> StepProgress {
    let idx = step.index();
    if idx < state.active_step {
        StepProgress::Done
    } else if idx == state.active_step {
        StepProgress::Active
    } else {
        StepProgress::Pending
    }
}
