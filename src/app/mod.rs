//! Application orchestration layer
//!
//! Coordinates config loading, the terminal screen and persistence without
//! containing UI logic itself.

/// Style screen startup and shutdown
pub mod launch;

pub use launch::{open_session, run_style_picker_terminal, store_session};
