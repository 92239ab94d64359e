//! The engine instance: bootstrap, configuration, inbound events, intro
//! overlay and chrome sync.

pub mod chrome;
pub mod config;
pub mod engine;
pub mod events;
pub mod overlay;
