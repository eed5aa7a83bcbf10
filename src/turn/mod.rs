//! Turn sequencing: rotation, doubles, jail entry.

pub mod sequencer;

pub use sequencer::{RollVerdict, TurnState};
