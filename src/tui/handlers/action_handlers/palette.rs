// Live palette action handlers

use crate::clipboard::copy_with_status;
use crate::models::ColorFormat;
use crate::tui::AppState;
use anyhow::Result;

/// Handle generate action
pub fn handle_generate(state: &mut AppState) -> Result<bool> {
    state.store.generate();
    let locked = state.store.slots().iter().filter(|slot| slot.locked).count();
    if locked == 0 {
        state.set_status("Generated new palette");
    } else {
        state.set_status(format!("Generated new palette ({locked} locked)"));
    }
    Ok(false)
}

/// Handle toggle lock action on the selected slot
pub fn handle_toggle_lock(state: &mut AppState) -> Result<bool> {
    match state.store.toggle_lock(state.selected_slot) {
        Ok(true) => state.set_status(format!("Locked color {}", state.selected_slot + 1)),
        Ok(false) => state.set_status(format!("Unlocked color {}", state.selected_slot + 1)),
        Err(e) => state.set_error(e.to_string()),
    }
    Ok(false)
}

/// Handle copy action: copies the selected color in the active notation
pub fn handle_copy_color(state: &mut AppState) -> Result<bool> {
    let text = match state.store.formatted_color(state.selected_slot) {
        Ok(text) => text,
        Err(e) => {
            state.set_error(e.to_string());
            return Ok(false);
        }
    };

    match copy_with_status(state.clipboard.as_mut(), &text) {
        Ok(message) => state.set_status(message),
        Err(message) => state.set_status_with_style(message, state.theme.warning),
    }
    Ok(false)
}

/// Handle format change action
pub fn handle_set_format(state: &mut AppState, format: ColorFormat) -> Result<bool> {
    state.store.set_format(format);
    state.set_status(format!("Format: {}", format.label()));
    Ok(false)
}

/// Handle cycle harmony rule action
pub fn handle_cycle_harmony(state: &mut AppState) -> Result<bool> {
    let rule = state.store.harmony_rule().next();
    state.store.set_harmony_rule(rule);
    state.set_status(format!("Harmony: {}", rule.label()));
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, ClipboardSink};
    use crate::config::Config;

    struct Unavailable;

    impl ClipboardSink for Unavailable {
        fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(arboard::Error::ClipboardNotSupported.into())
        }
    }

    fn state() -> AppState {
        let mut config = Config::new();
        config.palette.generate_on_start = false;
        AppState::new(config).unwrap()
    }

    #[test]
    fn test_generate_reports_locked_count() {
        let mut state = state();
        handle_toggle_lock(&mut state).unwrap();
        handle_generate(&mut state).unwrap();

        assert_eq!(state.status_message, "Generated new palette (1 locked)");
        assert_eq!(state.store.slots()[0].value.as_str(), "#FF5733");
    }

    #[test]
    fn test_toggle_lock_twice_unlocks() {
        let mut state = state();
        handle_toggle_lock(&mut state).unwrap();
        handle_toggle_lock(&mut state).unwrap();

        assert!(!state.store.slots()[0].locked);
        assert_eq!(state.status_message, "Unlocked color 1");
    }

    #[test]
    fn test_copy_failure_is_a_warning_not_an_error() {
        let mut state = state().with_clipboard(Box::new(Unavailable));
        handle_copy_color(&mut state).unwrap();

        assert!(state.error_message.is_none());
        assert!(state.status_message.starts_with("Failed to copy"));
        assert_eq!(state.status_color_override, Some(state.theme.warning));
    }
}
