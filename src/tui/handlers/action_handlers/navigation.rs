// Slot and saved-list navigation handlers

use crate::tui::AppState;
use anyhow::Result;

/// Handle select previous slot action (wraps to the last slot)
pub fn handle_select_prev_slot(state: &mut AppState) -> Result<bool> {
    let len = state.store.len();
    state.selected_slot = (state.selected_slot + len - 1) % len;
    state.clear_error();
    Ok(false)
}

/// Handle select next slot action (wraps to the first slot)
pub fn handle_select_next_slot(state: &mut AppState) -> Result<bool> {
    state.selected_slot = (state.selected_slot + 1) % state.store.len();
    state.clear_error();
    Ok(false)
}

/// Handle saved list cursor up action
pub fn handle_saved_up(state: &mut AppState) -> Result<bool> {
    state.selected_saved = state.selected_saved.saturating_sub(1);
    Ok(false)
}

/// Handle saved list cursor down action
pub fn handle_saved_down(state: &mut AppState) -> Result<bool> {
    if state.selected_saved + 1 < state.store.saved().len() {
        state.selected_saved += 1;
    }
    Ok(false)
}
