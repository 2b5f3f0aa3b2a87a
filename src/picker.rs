//! The checklist presenter: cursor movement, toggling, and rendering over a
//! backing [`crate::choice::ChoiceSet`].

pub mod picker_events;
pub mod picker_render;
mod picker_state;

#[cfg(test)]
mod picker_render_tests;

pub use picker_state::{PickerState, SessionOutcome};
