//! Component trait pattern for TUI components.
//!
//! This module defines the traits and types used to implement self-contained,
//! testable TUI components that can handle their own input and rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::export::ExportFormat;
use crate::models::HexColor;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component.
    ///
    /// The component should render itself within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component should close.
    ///
    /// Returns `true` if the component has finished its work and should be closed.
    /// Default implementation returns `false`.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events that can be emitted by popup components.
///
/// These events are emitted by components and processed by the parent (AppState)
/// to call the matching palette store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User confirmed a new color for a slot
    ColorEntered {
        /// Slot being edited
        index: usize,
        /// Validated color
        value: HexColor,
    },

    /// User picked an export target
    ExportChosen(ExportTarget),

    /// User cancelled without making changes
    Cancelled,

    /// Component closed naturally (e.g., help overlay dismissed)
    Closed,
}

/// What the export picker can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    /// The live palette in one format
    Current(ExportFormat),
    /// Every saved palette as one JSON array
    SavedCollection,
}
