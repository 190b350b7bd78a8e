//! TUI Module - the error frequency panel in the terminal
//!
//! - event_loop: entry point, terminal setup, message and event pump
//! - input: key and mouse handling against panel state
//! - layout: panel geometry and hit-testing
//! - render: header, table, status bar
//! - popup: detail popup for the selected group
//! - utils: help overlay

mod event_loop;
pub mod input;
pub mod layout;
pub mod popup;
pub mod render;
mod utils;

pub use event_loop::{run, run_with_source};
pub use input::{handle_event, Flow};
pub use render::draw_ui;
