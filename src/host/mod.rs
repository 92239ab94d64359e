//! Capability traits required from the hosting environment.

pub mod platform;
pub mod speech;
