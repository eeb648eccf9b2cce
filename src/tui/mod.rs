//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod color_editor;
pub mod component;
pub mod export_picker;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod palette_view;
pub mod saved_list;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::services::{PaletteStore, StoreEvent};

// Re-export TUI components
pub use color_editor::ColorEditor;
pub use component::{Component, ComponentEvent, ExportTarget};
pub use export_picker::ExportPicker;
pub use help_overlay::HelpOverlayState;
pub use palette_view::PaletteView;
pub use saved_list::SavedList;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Hex editor for the selected slot
    ColorEditor,
    /// Export target picker
    ExportPicker,
    /// Help overlay popup
    HelpOverlay,
}

/// Active component - holds the currently active popup component
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Hex editor component
    ColorEditor(ColorEditor),
    /// Export picker component
    ExportPicker(ExportPicker),
}

/// Application state - single source of truth for the UI
///
/// Palette data lives in the store; everything else here is view state.
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Palette store, the only write path for palette state
    pub store: PaletteStore,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Index of the highlighted slot
    pub selected_slot: usize,
    /// Index into the saved palette list
    pub selected_saved: usize,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Help overlay scroll state
    pub help_overlay_state: HelpOverlayState,
    /// Status bar message
    pub status_message: String,
    /// Optional color override for status message (warnings rendered via status)
    pub status_color_override: Option<ratatui::style::Color>,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Clipboard destination for copied colors
    pub clipboard: Box<dyn ClipboardSink>,
    /// Store events not yet applied to view state
    pending_events: Rc<RefCell<Vec<StoreEvent>>>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the UI state from configuration.
    ///
    /// Applies the configured format and harmony rule, and generates once if
    /// `generate_on_start` is set.
    pub fn new(config: Config) -> Result<Self> {
        let mut store =
            PaletteStore::from_config(&config.palette).context("Failed to create palette")?;
        store.set_format(config.ui.default_format);
        store.set_harmony_rule(config.ui.default_harmony);
        if config.palette.generate_on_start {
            store.generate();
        }

        let pending_events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending_events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let active_popup = config
            .ui
            .show_help_on_startup
            .then_some(PopupType::HelpOverlay);

        Ok(Self {
            store,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            selected_slot: 0,
            selected_saved: 0,
            active_popup,
            active_component: None,
            help_overlay_state: HelpOverlayState::new(),
            status_message: String::new(),
            status_color_override: None,
            error_message: None,
            clipboard: Box::new(SystemClipboard),
            pending_events,
            should_quit: false,
        })
    }

    /// Replaces the clipboard destination.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Applies store events to the view state (selection bounds, list cursor).
    pub fn sync_with_store(&mut self) {
        let events: Vec<StoreEvent> = self.pending_events.borrow_mut().drain(..).collect();
        for event in events {
            debug!(?event, "Store event");
            match event {
                StoreEvent::PaletteSaved(_) => {
                    self.selected_saved = self.store.saved().len().saturating_sub(1);
                }
                StoreEvent::PaletteDeleted(_) => {
                    let len = self.store.saved().len();
                    self.selected_saved = self.selected_saved.min(len.saturating_sub(1));
                }
                StoreEvent::PaletteLoaded(_) => {
                    self.selected_slot = self.selected_slot.min(self.store.len() - 1);
                }
                _ => {}
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = None;
    }

    /// Set status message with custom foreground color (used for warnings)
    pub fn set_status_with_style(
        &mut self,
        message: impl Into<String>,
        color: ratatui::style::Color,
    ) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = Some(color);
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Open the hex editor for the selected slot
    pub fn open_color_editor(&mut self) {
        if let Ok(slot) = self.store.slot(self.selected_slot) {
            let editor = ColorEditor::new(self.selected_slot, &slot.value);
            self.active_component = Some(ActiveComponent::ColorEditor(editor));
            self.active_popup = Some(PopupType::ColorEditor);
        }
    }

    /// Open the export picker
    pub fn open_export_picker(&mut self) {
        let picker = ExportPicker::new(
            !self.store.saved().is_empty(),
            self.config.export.output_dir.clone(),
        );
        self.active_component = Some(ActiveComponent::ExportPicker(picker));
        self.active_popup = Some(PopupType::ExportPicker);
    }

    /// Open the help overlay
    pub fn open_help_overlay(&mut self) {
        self.help_overlay_state.scroll_to_top();
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the active popup and its component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Sets up the terminal, runs the event loop and always restores the terminal.
pub fn launch(config: Config) -> Result<()> {
    let mut state = AppState::new(config)?;
    info!(slots = state.store.len(), "Starting TUI");

    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;

    info!("TUI closed");
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            // Resize needs no handling; the next draw picks up the new size
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        state.sync_with_store();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(popup_type) = state.active_popup {
        render_popup(f, popup_type, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with format and harmony indicators
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Format: ", Style::default().fg(theme.text_muted)),
        Span::styled(state.store.format().label(), Style::default().fg(theme.accent)),
        Span::styled("  Harmony: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.store.harmony_rule().label(),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            format!("  {} colors", state.store.len()),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render main content (palette and saved list)
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    PaletteView::render(f, chunks[0], state);
    SavedList::render(f, chunks[1], state);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: PopupType, state: &AppState) {
    match popup_type {
        PopupType::ColorEditor => {
            if let Some(ActiveComponent::ColorEditor(ref editor)) = state.active_component {
                editor.render(f, f.area(), &state.theme);
            }
        }
        PopupType::ExportPicker => {
            if let Some(ActiveComponent::ExportPicker(ref picker)) = state.active_component {
                picker.render(f, f.area(), &state.theme);
            }
        }
        PopupType::HelpOverlay => {
            state.help_overlay_state.render(f, f.area(), &state.theme);
        }
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[1]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::config::ThemeMode;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct Recording(Rc<RefCell<Vec<String>>>);

    impl ClipboardSink for Recording {
        fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn test_config() -> Config {
        let mut config = Config::new();
        config.palette.generate_on_start = false;
        config.ui.theme_mode = ThemeMode::Dark;
        config
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        let quit = handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        state.sync_with_store();
        quit
    }

    #[test]
    fn test_initial_state_follows_config() {
        let mut config = test_config();
        config.ui.default_format = crate::models::ColorFormat::Rgb;
        let state = AppState::new(config).unwrap();

        assert_eq!(state.store.len(), 5);
        assert_eq!(state.store.slots()[0].value.as_str(), "#FF5733");
        assert_eq!(state.store.formatted_color(0).unwrap(), "rgb(255, 87, 51)");
        assert!(state.active_popup.is_none());
    }

    #[test]
    fn test_generate_on_start_replaces_defaults() {
        let mut config = test_config();
        config.palette.generate_on_start = true;
        let state = AppState::new(config).unwrap();

        // Sampled colors are lowercase, so none can equal the uppercase defaults
        assert_ne!(state.store.slots()[0].value.as_str(), "#FF5733");
    }

    #[test]
    fn test_copy_uses_active_format() {
        let copied = Rc::new(RefCell::new(Vec::new()));
        let mut state = AppState::new(test_config())
            .unwrap()
            .with_clipboard(Box::new(Recording(Rc::clone(&copied))));

        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Char('y'));

        assert_eq!(copied.borrow().as_slice(), ["hsl(11, 100%, 60%)"]);
        assert_eq!(state.status_message, "Copied hsl(11, 100%, 60%)");
    }

    #[test]
    fn test_lock_then_generate_keeps_slot() {
        let mut state = AppState::new(test_config()).unwrap();

        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char('x'));
        press(&mut state, KeyCode::Char(' '));

        assert!(state.store.slots()[1].locked);
        assert_eq!(state.store.slots()[1].value.as_str(), "#33FF57");
    }

    #[test]
    fn test_edit_color_through_popup() {
        let mut state = AppState::new(test_config()).unwrap();

        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.active_popup, Some(PopupType::ColorEditor));

        for _ in 0..7 {
            press(&mut state, KeyCode::Backspace);
        }
        for c in "#000000".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Enter);

        assert!(state.active_popup.is_none());
        assert_eq!(state.store.slots()[0].value.as_str(), "#000000");
    }

    #[test]
    fn test_save_load_delete_keep_cursor_in_range() {
        let mut state = AppState::new(test_config()).unwrap();

        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.selected_saved, 1);

        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.store.saved().len(), 1);
        assert_eq!(state.selected_saved, 0);

        press(&mut state, KeyCode::Char('g'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.slots()[0].value.as_str(), "#FF5733");
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new(test_config()).unwrap();
        assert!(press(&mut state, KeyCode::Char('q')));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 25);
        assert_eq!(inner.x, 25);
    }
}
