//! Text-to-speech narration: voice resolution and the utterance slot.

pub mod narrator;
pub mod voice;
