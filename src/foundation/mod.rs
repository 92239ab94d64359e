//! Error taxonomy and core value types shared by every module.

pub mod core;
pub mod error;
