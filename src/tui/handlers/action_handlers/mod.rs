//! Action handlers organized by category

/// Export of the live palette and saved collection
pub mod export;

/// Slot and saved-list navigation handlers
pub mod navigation;

/// Live palette handlers (generate, lock, copy, notation)
pub mod palette;

/// Popup and overlay management handlers
pub mod popups;

/// Saved palette handlers (save, load, delete)
pub mod saved;
