//! Selection-state container for a fixed set of choices.
//!
//! `ChoiceSet` owns the candidate list and the per-choice selected/unselected
//! state; the picker renders it and forwards toggles into it.

mod choice_set;


pub use choice_set::{BuildError, ChoiceError, ChoiceSet};
