//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{ShortcutRegistry, MAIN_CONTEXT};
use crate::tui::AppState;

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(MAIN_CONTEXT, key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
