//! Popup input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use super::action_handlers::export;
use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent, PopupType};

/// Route input to the active popup
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::HelpOverlay) => handle_help_overlay_input(state, key),
        Some(PopupType::ColorEditor | PopupType::ExportPicker) => {
            handle_component_input(state, key)
        }
        None => Ok(false),
    }
}

/// Forward a key to the active component and act on what it emits
fn handle_component_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let event = match state.active_component.as_mut() {
        Some(ActiveComponent::ColorEditor(editor)) => editor.handle_input(key),
        Some(ActiveComponent::ExportPicker(picker)) => picker.handle_input(key),
        None => {
            // Popup without a component: nothing left to show
            state.active_popup = None;
            return Ok(false);
        }
    };

    match event {
        Some(event) => handle_component_event(state, event),
        None => Ok(false),
    }
}

/// Apply a component event to the application state
fn handle_component_event(state: &mut AppState, event: ComponentEvent) -> Result<bool> {
    state.close_component();

    match event {
        ComponentEvent::ColorEntered { index, value } => {
            match state.store.set_color(index, value.as_str()) {
                Ok(()) => state.set_status(format!("Set color {} to {value}", index + 1)),
                Err(e) => state.set_error(e.to_string()),
            }
            Ok(false)
        }
        ComponentEvent::ExportChosen(target) => export::handle_export(state, target),
        ComponentEvent::Cancelled => {
            state.set_status("Cancelled");
            Ok(false)
        }
        ComponentEvent::Closed => Ok(false),
    }
}

/// Handle input for help overlay
pub fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        // Close help with Escape, 'q' or '?'
        KeyCode::Esc | KeyCode::Char('?' | 'q') => {
            state.close_component();
            state.set_status("Press ? for help");
            Ok(false)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_overlay_state.scroll_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.help_overlay_state.scroll_down();
            Ok(false)
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.help_overlay_state.scroll_to_top();
            Ok(false)
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.help_overlay_state.scroll_to_bottom();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn state() -> AppState {
        let mut config = Config::new();
        config.palette.generate_on_start = false;
        AppState::new(config).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cancelled_editor_leaves_color() {
        let mut state = state();
        state.open_color_editor();

        handle_popup_input(&mut state, key(KeyCode::Char('0'))).unwrap();
        handle_popup_input(&mut state, key(KeyCode::Esc)).unwrap();

        assert!(state.active_popup.is_none());
        assert!(state.active_component.is_none());
        assert_eq!(state.store.slots()[0].value.as_str(), "#FF5733");
    }

    #[test]
    fn test_invalid_hex_keeps_editor_open() {
        let mut state = state();
        state.open_color_editor();

        handle_popup_input(&mut state, key(KeyCode::Backspace)).unwrap();
        handle_popup_input(&mut state, key(KeyCode::Enter)).unwrap();

        assert_eq!(state.active_popup, Some(PopupType::ColorEditor));
        assert_eq!(state.store.slots()[0].value.as_str(), "#FF5733");
    }

    #[test]
    fn test_help_overlay_closes() {
        let mut state = state();
        state.open_help_overlay();

        handle_popup_input(&mut state, key(KeyCode::Down)).unwrap();
        handle_popup_input(&mut state, key(KeyCode::Esc)).unwrap();

        assert!(state.active_popup.is_none());
    }
}
