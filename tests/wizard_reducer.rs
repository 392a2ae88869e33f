use assembly_designer::ui::mvi::{dispatch, Reducer};
use assembly_designer::ui::wizard::{
    WizardIntent, WizardReducer, WizardState, DEFAULT_SELECTION, STEP_COUNT,
};

fn at_step(active_step: usize) -> WizardState {
    WizardState {
        active_step,
        selection: DEFAULT_SELECTION.to_string(),
    }
}

fn reduce_all(mut state: WizardState, intents: &[WizardIntent]) -> WizardState {
    for intent in intents {
        state = WizardReducer::reduce(state, intent.clone());
    }
    state
}

#[test]
fn default_state_starts_at_step_zero_with_basic() {
    let state = WizardState::default();
    assert_eq!(state.active_step, 0);
    assert_eq!(state.selection, "basic");
    assert_eq!(state.step_count(), 3);
}

#[test]
fn advance_increments_step() {
    let state = WizardReducer::reduce(at_step(0), WizardIntent::Advance);
    assert_eq!(state.active_step, 1);
}

#[test]
fn advance_step_count_times_completes() {
    let state = reduce_all(at_step(0), &vec![WizardIntent::Advance; STEP_COUNT]);
    assert_eq!(state.active_step, STEP_COUNT);
    assert!(state.is_completed());
    assert_eq!(state.current_step(), None);
}

#[test]
fn advance_past_completion_is_clamped() {
    let state = reduce_all(at_step(0), &vec![WizardIntent::Advance; STEP_COUNT + 4]);
    assert_eq!(state.active_step, STEP_COUNT);
}

#[test]
fn out_of_range_step_advances_back_to_completed() {
    let state = WizardReducer::reduce(at_step(STEP_COUNT + 7), WizardIntent::Advance);
    assert_eq!(state.active_step, STEP_COUNT);
}

#[test]
fn max_step_advances_without_overflow() {
    let state = WizardReducer::reduce(at_step(usize::MAX), WizardIntent::Advance);
    assert_eq!(state.active_step, STEP_COUNT);
    assert!(!at_step(usize::MAX).is_last_step());
}

#[test]
fn retreat_decrements_step() {
    let state = WizardReducer::reduce(at_step(2), WizardIntent::Retreat);
    assert_eq!(state.active_step, 1);
}

#[test]
fn retreat_at_zero_is_noop() {
    let state = WizardReducer::reduce(at_step(0), WizardIntent::Retreat);
    assert_eq!(state, at_step(0));
}

#[test]
fn retreat_on_completion_view_is_noop() {
    let state = WizardReducer::reduce(at_step(STEP_COUNT), WizardIntent::Retreat);
    assert_eq!(state.active_step, STEP_COUNT);
}

#[test]
fn reset_returns_to_zero_from_any_step() {
    for step in 0..=STEP_COUNT {
        let state = WizardReducer::reduce(at_step(step), WizardIntent::Reset);
        assert_eq!(state.active_step, 0, "reset from step {}", step);
    }
}

#[test]
fn reset_keeps_selection() {
    let state = reduce_all(
        at_step(0),
        &[
            WizardIntent::SetSelection("moclo".into()),
            WizardIntent::Advance,
            WizardIntent::Advance,
            WizardIntent::Advance,
            WizardIntent::Reset,
        ],
    );
    assert_eq!(state.active_step, 0);
    assert_eq!(state.selection, "moclo");
}

#[test]
fn set_selection_survives_step_changes() {
    let state = reduce_all(
        at_step(0),
        &[WizardIntent::SetSelection("x".into()), WizardIntent::Advance],
    );
    assert_eq!(state.active_step, 1);
    assert_eq!(state.selection, "x");
}

#[test]
fn set_selection_last_write_wins() {
    let state = reduce_all(
        at_step(1),
        &[
            WizardIntent::SetSelection("golden_gate".into()),
            WizardIntent::SetSelection("".into()),
            WizardIntent::SetSelection("bio_bricks".into()),
        ],
    );
    assert_eq!(state.selection, "bio_bricks");
    assert_eq!(state.active_step, 1);
}

#[test]
fn set_selection_does_not_validate() {
    let state = WizardReducer::reduce(at_step(0), WizardIntent::SetSelection("".into()));
    assert_eq!(state.selection, "");
}

#[test]
fn dispatch_reports_whether_state_changed() {
    let mut state = at_step(0);
    assert!(!dispatch::<WizardReducer>(&mut state, WizardIntent::Retreat));
    assert!(dispatch::<WizardReducer>(&mut state, WizardIntent::Advance));
    assert_eq!(state.active_step, 1);
    assert!(!dispatch::<WizardReducer>(
        &mut state,
        WizardIntent::SetSelection("basic".into())
    ));
}
