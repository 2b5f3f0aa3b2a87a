use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Handle keys for the checklist
pub fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.picker.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.picker.select_next(),

        // Mutation
        KeyCode::Char(' ') => app.picker.toggle_at_cursor(),
        KeyCode::Char('r') => app.picker.reset(),

        // Session end
        KeyCode::Enter => app.picker.apply(),
        KeyCode::Esc | KeyCode::Char('q') => app.picker.cancel(),

        _ => {}
    }
}
