//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (clock, file reading) live here so state modules stay
//! plain data. `gallery_actions` is the async glue between `net::api` and
//! the state signals.

pub mod clock;
pub mod file;
pub mod gallery_actions;
