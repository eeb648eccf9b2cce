//! Action dispatch from the shortcut registry to handlers.

use anyhow::Result;

use crate::models::ColorFormat;
use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{navigation, palette, popups, saved};

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation (4 actions)
        Action::SelectPrevSlot => navigation::handle_select_prev_slot(state),
        Action::SelectNextSlot => navigation::handle_select_next_slot(state),
        Action::SavedUp => navigation::handle_saved_up(state),
        Action::SavedDown => navigation::handle_saved_down(state),

        // Palette (8 actions)
        Action::Generate => palette::handle_generate(state),
        Action::ToggleLock => palette::handle_toggle_lock(state),
        Action::CopyColor => palette::handle_copy_color(state),
        Action::CycleFormat => {
            let next = state.store.format().next();
            palette::handle_set_format(state, next)
        }
        Action::FormatHex => palette::handle_set_format(state, ColorFormat::Hex),
        Action::FormatRgb => palette::handle_set_format(state, ColorFormat::Rgb),
        Action::FormatHsl => palette::handle_set_format(state, ColorFormat::Hsl),
        Action::CycleHarmony => palette::handle_cycle_harmony(state),

        // Saved palettes (3 actions)
        Action::SavePalette => saved::handle_save_palette(state),
        Action::LoadPalette => saved::handle_load_palette(state),
        Action::DeletePalette => saved::handle_delete_palette(state),

        // Popups (3 actions)
        Action::EditColor => popups::handle_edit_color(state),
        Action::OpenExport => popups::handle_open_export(state),
        Action::ToggleHelp => popups::handle_toggle_help(state),

        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }

        Action::Cancel => {
            // Escape clears any lingering status line
            state.set_status("");
            Ok(false)
        }
    }
}
