//! Unidirectional state primitives for the wizard UI.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! A screen keeps exactly one state value. Every change to it is an
//! intent fed through the screen's reducer, never a field assignment.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
