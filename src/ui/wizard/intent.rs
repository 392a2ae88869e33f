use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    /// Next / Finish button.
    Advance,
    /// Back button.
    Retreat,
    /// Reset button on the completion view.
    Reset,
    /// A step view replaced the shared selection.
    SetSelection(String),
}

impl Intent for WizardIntent {}
