use crate::ui::mvi::Reducer;
use crate::ui::wizard::intent::WizardIntent;
use crate::ui::wizard::state::WizardState;
use crate::ui::wizard::steps::STEP_COUNT;

pub struct WizardReducer;

impl Reducer for WizardReducer {
    type State = WizardState;
    type Intent = WizardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WizardIntent::Advance => {
                // Finished is terminal until Reset.
                let active_step = state.active_step.saturating_add(1).min(STEP_COUNT);
                WizardState {
                    active_step,
                    ..state
                }
            }
            WizardIntent::Retreat => {
                if !state.back_enabled() {
                    return state;
                }
                WizardState {
                    active_step: state.active_step - 1,
                    ..state
                }
            }
            WizardIntent::Reset => WizardState {
                active_step: 0,
                ..state
            },
            WizardIntent::SetSelection(selection) => WizardState { selection, ..state },
        }
    }
}
