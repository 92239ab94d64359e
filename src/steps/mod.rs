//! Step reveal: text-pane blocks, enter transitions, narration handoff.

pub mod renderer;
pub mod text;
