//! errboard library - exposes modules for the binary and integration tests

pub mod commands;
pub mod errors;
pub mod loader;
pub mod logging;
pub mod panel;
pub mod tui;
