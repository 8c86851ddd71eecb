//! Map Style Picker Library
//!
//! This library provides the style model, stored settings, and the terminal
//! style selection screen used by the `mapstyle` binary.

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod tui;
