pub mod app;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod panels;
pub mod render;
pub mod runtime;
pub mod stepper;
pub mod terminal_guard;
pub mod theme;
pub mod wizard;
