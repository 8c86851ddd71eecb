//! Component trait pattern for TUI components.
//!
//! Components are self-contained UI elements that manage their own widget
//! state, handle keyboard input, and emit events to the parent loop.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that needs shared application state.
///
/// The context is borrowed mutably while handling input, because some
/// components write through to live application state (overlay flags,
/// saved settings) as the user interacts with them.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    fn handle_input(&mut self, key: KeyEvent, context: &mut Self::Context) -> Option<Self::Event>;

    /// Render the component with access to shared context.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);

    /// Check if component should close.
    fn should_close(&self) -> bool {
        false
    }
}
