pub mod input;
pub mod renderers;
pub mod terminal;
pub mod toast;
pub mod utils;

use std::io;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::types::{App, AppMode};

// Re-export the main public functions
pub use terminal::{restore_terminal, setup_terminal};

/// Main UI rendering function that delegates to specific mode renderers
pub fn render_ui(
    app: &App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    terminal.draw(|f| {
        match app.mode {
            AppMode::EditingPath => renderers::path_editor::render(f, app),
            AppMode::Dashboard => {
                if app.warning.is_some() {
                    renderers::warning::render(f, app);
                } else {
                    renderers::dashboard::render(f, app);
                }
            }
        }
        // Toasts sit above whatever mode is on screen
        toast::render(f, app);
    })?;
    Ok(())
}
