//! Step views shown in the wizard body.
//!
//! Each panel gets the shared selection when rendering and when handling a
//! key. A panel asks for a new selection by returning `Some(value)` from
//! [`StepPanel::on_key`]; the app turns that into a
//! [`WizardIntent::SetSelection`](crate::ui::wizard::WizardIntent).

mod designer;
mod specification;
mod upload;

pub use designer::DesignerPanel;
pub use specification::SpecificationPanel;
pub use upload::UploadPanel;

use crossterm::event::KeyEvent;
use ratatui::text::Line;

use crate::ui::wizard::StepId;

pub trait StepPanel {
    fn step(&self) -> StepId;

    fn lines(&self, selection: &str) -> Vec<Line<'static>>;

    /// Handle a key the global key map did not consume.
    fn on_key(&mut self, key: KeyEvent, selection: &str) -> Option<String>;

    /// Called each time the panel becomes the active step.
    fn on_enter(&mut self, _selection: &str) {}

    /// Called before the wizard moves off this step. `Some(value)` is
    /// applied as the selection before the step changes.
    fn on_leave(&mut self, _selection: &str) -> Option<String> {
        None
    }

    /// True while the panel wants printable characters for text entry.
    fn captures_text(&self) -> bool {
        false
    }
}

/// One panel per step, in step order.
pub fn default_panels(assembly_methods: &[String]) -> Vec<Box<dyn StepPanel>> {
    vec![
        Box::new(DesignerPanel::new(assembly_methods.to_vec())),
        Box::new(UploadPanel::new()),
        Box::new(SpecificationPanel),
    ]
}
