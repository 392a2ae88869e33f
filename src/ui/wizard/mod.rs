mod intent;
mod reducer;
mod state;
mod steps;
mod view;

pub use intent::WizardIntent;
pub use reducer::WizardReducer;
pub use state::{WizardState, DEFAULT_SELECTION};
pub use steps::{StepId, STEP_COUNT};
pub use view::{step_progress, StepProgress, WizardView};
