//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context name for the main palette screen.
pub const MAIN_CONTEXT: &str = "main";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SLOT NAVIGATION ===
    /// Select the previous slot
    SelectPrevSlot,
    /// Select the next slot
    SelectNextSlot,

    // === SAVED LIST NAVIGATION ===
    /// Move up the saved palette list
    SavedUp,
    /// Move down the saved palette list
    SavedDown,

    // === PALETTE ===
    /// Resample every unlocked slot
    Generate,
    /// Lock or unlock the selected slot
    ToggleLock,
    /// Open the hex editor for the selected slot
    EditColor,
    /// Copy the selected slot in the active format
    CopyColor,

    // === FORMAT & HARMONY ===
    /// Step to the next display format
    CycleFormat,
    /// Show hex codes
    FormatHex,
    /// Show rgb() codes
    FormatRgb,
    /// Show hsl() codes
    FormatHsl,
    /// Step to the next harmony rule
    CycleHarmony,

    // === SAVED PALETTES ===
    /// Snapshot the live palette
    SavePalette,
    /// Load the highlighted saved palette
    LoadPalette,
    /// Delete the highlighted saved palette
    DeletePalette,

    // === EXPORT ===
    /// Open the export picker
    OpenExport,

    // === HELP ===
    /// Show or hide the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Leave the application
    Quit,
    /// Dismiss transient state
    Cancel,
}

impl Action {
    /// Get the action ID string used in help.toml
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            // Navigation
            Self::SelectPrevSlot => "select_prev_slot",
            Self::SelectNextSlot => "select_next_slot",
            Self::SavedUp => "saved_up",
            Self::SavedDown => "saved_down",

            // Palette
            Self::Generate => "generate",
            Self::ToggleLock => "toggle_lock",
            Self::EditColor => "edit_color",
            Self::CopyColor => "copy_color",

            // Format & harmony
            Self::CycleFormat => "cycle_format",
            Self::FormatHex => "format_hex",
            Self::FormatRgb => "format_rgb",
            Self::FormatHsl => "format_hsl",
            Self::CycleHarmony => "cycle_harmony",

            // Saved palettes
            Self::SavePalette => "save_palette",
            Self::LoadPalette => "load_palette",
            Self::DeletePalette => "delete_palette",

            // Export
            Self::OpenExport => "open_export",

            // Help
            Self::ToggleHelp => "toggle_help",

            // General
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys held with it
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === SLOT NAVIGATION ===
        self.register(ctx, K::Left, M::NONE, Action::SelectPrevSlot);
        self.register(ctx, K::Right, M::NONE, Action::SelectNextSlot);
        self.register(ctx, K::Char('h'), M::NONE, Action::SelectPrevSlot);
        self.register(ctx, K::Char('l'), M::NONE, Action::SelectNextSlot);
        self.register(ctx, K::BackTab, M::SHIFT, Action::SelectPrevSlot);
        self.register(ctx, K::Tab, M::NONE, Action::SelectNextSlot);

        // === SAVED LIST ===
        self.register(ctx, K::Up, M::NONE, Action::SavedUp);
        self.register(ctx, K::Down, M::NONE, Action::SavedDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::SavedUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::SavedDown);

        // === PALETTE ===
        self.register(ctx, K::Char(' '), M::NONE, Action::Generate);
        self.register(ctx, K::Char('g'), M::NONE, Action::Generate);
        self.register(ctx, K::Char('x'), M::NONE, Action::ToggleLock);
        self.register(ctx, K::Char('e'), M::NONE, Action::EditColor);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyColor);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::CopyColor);

        // === FORMAT & HARMONY ===
        self.register(ctx, K::Char('f'), M::NONE, Action::CycleFormat);
        self.register(ctx, K::Char('1'), M::NONE, Action::FormatHex);
        self.register(ctx, K::Char('2'), M::NONE, Action::FormatRgb);
        self.register(ctx, K::Char('3'), M::NONE, Action::FormatHsl);
        self.register(ctx, K::Char('r'), M::NONE, Action::CycleHarmony);

        // === SAVED PALETTES ===
        self.register(ctx, K::Char('s'), M::NONE, Action::SavePalette);
        self.register(ctx, K::Char('s'), M::CONTROL, Action::SavePalette);
        self.register(ctx, K::Char('o'), M::NONE, Action::LoadPalette);
        self.register(ctx, K::Enter, M::NONE, Action::LoadPalette);
        self.register(ctx, K::Char('d'), M::NONE, Action::DeletePalette);
        self.register(ctx, K::Delete, M::NONE, Action::DeletePalette);

        // === EXPORT ===
        self.register(ctx, K::Char('E'), M::SHIFT, Action::OpenExport);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    ///
    /// Terminals disagree on whether `?` and uppercase letters carry SHIFT, so
    /// a character key that misses is retried with SHIFT toggled.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        if let Some(action) = self.bindings.get(&(context.to_string(), binding)) {
            return Some(*action);
        }

        if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
            let toggled = KeyBinding::new(event.code, event.modifiers ^ KeyModifiers::SHIFT);
            return self.bindings.get(&(context.to_string(), toggled)).copied();
        }

        None
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
