//! The pure navigation state machine: cursor, transitions, boundary rules.

pub mod machine;
