//! Inline editing of the lead grid: one editing cursor and its keyboard
//! transitions.

pub mod controller;
pub mod navigation;
pub mod session;

pub use controller::{AppliedEdit, CommitOutcome, EditEnv, GridController, GridKey};
pub use navigation::{Direction, EditingCursor, next_cell, previous_cell};
