// Popup management action handlers

use crate::tui::{AppState, PopupType};
use anyhow::Result;

/// Handle edit color action
pub fn handle_edit_color(state: &mut AppState) -> Result<bool> {
    state.open_color_editor();
    state.set_status("Edit color - Enter: apply, Esc: cancel");
    Ok(false)
}

/// Handle open export action
pub fn handle_open_export(state: &mut AppState) -> Result<bool> {
    state.open_export_picker();
    state.set_status("Export - Enter: write file, Esc: cancel");
    Ok(false)
}

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.active_popup == Some(PopupType::HelpOverlay) {
        state.close_component();
    } else {
        state.open_help_overlay();
    }
    Ok(false)
}
