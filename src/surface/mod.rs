//! Render-surface lifecycle and the per-slide mutable state bag.

pub mod lifecycle;
pub mod state;
