//! Terminal user interface components and the event loop.
//!
//! This module contains terminal setup, the main loop driving a
//! [`ContextualComponent`], and the widgets of the style screen.

pub mod component;
pub mod level_field;
pub mod picker;
pub mod style_screen;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::config::ThemeMode;

pub use component::ContextualComponent;
pub use level_field::LevelField;
pub use picker::PickerState;
pub use style_screen::{
    FocusField, LevelKind, StyleScreenContext, StyleScreenEvent, StyleSelectionScreen,
};
pub use theme::Theme;

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the style screen until it closes.
///
/// Returns the event that closed the screen.
pub fn run_style_screen(
    screen: &mut StyleSelectionScreen,
    context: &mut StyleScreenContext,
    theme_mode: ThemeMode,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<StyleScreenEvent> {
    loop {
        // Re-resolve on each frame so Auto follows OS theme changes
        let theme = Theme::from_mode(theme_mode);

        terminal.draw(|f| {
            let area = f.area();
            screen.render(f, area, &theme, context);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(closing) = screen.handle_input(key, context) {
                    return Ok(closing);
                }
            }
            Event::FocusGained => {
                debug!("terminal focus regained, resyncing pickers");
                screen.on_appear();
            }
            // Resize and the rest re-render on the next loop
            _ => {}
        }

        if screen.should_close() {
            return Ok(StyleScreenEvent::Cancelled);
        }
    }
}
