// Saved palette action handlers

use crate::tui::AppState;
use anyhow::Result;

/// Handle save action: stores the live palette under a default name
pub fn handle_save_palette(state: &mut AppState) -> Result<bool> {
    let id = state.store.save_palette();
    let name = state
        .store
        .saved_palette(id)
        .map(|palette| palette.name.clone())
        .unwrap_or_default();
    state.set_status(format!("Saved {name}"));
    Ok(false)
}

/// Handle load action for the palette under the saved-list cursor
pub fn handle_load_palette(state: &mut AppState) -> Result<bool> {
    let Some(palette) = state.store.saved().get(state.selected_saved) else {
        state.set_status("No saved palette selected");
        return Ok(false);
    };
    let (id, name) = (palette.id, palette.name.clone());

    match state.store.load_palette(id) {
        Ok(()) => state.set_status(format!("Loaded {name}")),
        Err(e) => state.set_error(e.to_string()),
    }
    Ok(false)
}

/// Handle delete action for the palette under the saved-list cursor
pub fn handle_delete_palette(state: &mut AppState) -> Result<bool> {
    let Some(id) = state
        .store
        .saved()
        .get(state.selected_saved)
        .map(|palette| palette.id)
    else {
        state.set_status("No saved palette selected");
        return Ok(false);
    };

    match state.store.delete_palette(id) {
        Ok(removed) => state.set_status(format!("Deleted {}", removed.name)),
        Err(e) => state.set_error(e.to_string()),
    }
    Ok(false)
}
