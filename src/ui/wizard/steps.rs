/// The named stages of the designer, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    SbolDesigner,
    FileUpload,
    Specifications,
}

impl StepId {
    pub const ALL: [StepId; 3] = [
        StepId::SbolDesigner,
        StepId::FileUpload,
        StepId::Specifications,
    ];

    /// Step for a zero-based index, `None` past the last step.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            StepId::SbolDesigner => 0,
            StepId::FileUpload => 1,
            StepId::Specifications => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StepId::SbolDesigner => "SBOL Designer",
            StepId::FileUpload => "SBOL File Upload",
            StepId::Specifications => "Specifications",
        }
    }

    /// Whether this step's view may change the shared selection.
    pub fn edits_selection(self) -> bool {
        !matches!(self, StepId::Specifications)
    }
}

/// Number of steps. `active_step == STEP_COUNT` is the completed state.
pub const STEP_COUNT: usize = StepId::ALL.len();
