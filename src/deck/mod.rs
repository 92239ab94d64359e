//! Slide, step and deck definitions plus the builder DSL.

pub mod dsl;
pub mod model;
