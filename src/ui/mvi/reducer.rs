use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Intents that do not apply to the current state return it unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state held in `slot`, replacing it in place.
///
/// Returns `true` if the state changed.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) -> bool {
    let before = std::mem::take(slot);
    let after = R::reduce(before.clone(), intent);
    let changed = after != before;
    *slot = after;
    changed
}
