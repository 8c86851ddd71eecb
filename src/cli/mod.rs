//! Non-interactive commands.
//!
//! Scriptable access to the stored settings and the style catalog.

pub mod show;
pub mod styles;

pub use show::ShowArgs;
pub use styles::StylesArgs;
