//! Export target picker popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::path::PathBuf;

use super::component::{Component, ComponentEvent, ExportTarget};
use super::Theme;
use crate::export::ExportFormat;

/// List of export targets with a cursor.
#[derive(Debug, Clone)]
pub struct ExportPicker {
    targets: Vec<ExportTarget>,
    selected: usize,
    output_dir: PathBuf,
    closed: bool,
}

impl ExportPicker {
    /// Creates a picker; the saved collection is offered only when there is one.
    #[must_use]
    pub fn new(has_saved: bool, output_dir: PathBuf) -> Self {
        let mut targets: Vec<ExportTarget> = ExportFormat::ALL
            .iter()
            .map(|format| ExportTarget::Current(*format))
            .collect();
        if has_saved {
            targets.push(ExportTarget::SavedCollection);
        }

        Self {
            targets,
            selected: 0,
            output_dir,
            closed: false,
        }
    }

    /// Target under the cursor.
    #[must_use]
    pub fn selected(&self) -> ExportTarget {
        self.targets[self.selected]
    }

    fn label(target: ExportTarget) -> String {
        match target {
            ExportTarget::Current(format) => format!("Current palette as {}", format.label()),
            ExportTarget::SavedCollection => "All saved palettes as JSON".to_string(),
        }
    }
}

impl Component for ExportPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.targets.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => {
                self.closed = true;
                Some(ComponentEvent::ExportChosen(self.selected()))
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.closed = true;
                Some(ComponentEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = super::centered_rect(50, 40, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Export ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let items: Vec<ListItem> = self
            .targets
            .iter()
            .map(|target| ListItem::new(Self::label(*target)))
            .collect();
        let list = List::new(items)
            .style(Style::default().fg(theme.text))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let list_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(list, list_area, &mut list_state);

        let footer = Paragraph::new(vec![Line::from(vec![
            Span::styled("To: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                self.output_dir.display().to_string(),
                Style::default().fg(theme.text_secondary),
            ),
        ])]);
        let footer_area = Rect {
            y: inner.y + list_area.height,
            height: inner.height.saturating_sub(list_area.height),
            ..inner
        };
        f.render_widget(footer, footer_area);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_saved_collection_only_when_available() {
        let picker = ExportPicker::new(false, PathBuf::from("out"));
        assert_eq!(picker.targets.len(), 3);

        let picker = ExportPicker::new(true, PathBuf::from("out"));
        assert_eq!(picker.targets.last(), Some(&ExportTarget::SavedCollection));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut picker = ExportPicker::new(false, PathBuf::from("out"));
        picker.handle_input(key(KeyCode::Up));
        assert_eq!(picker.selected(), ExportTarget::Current(ExportFormat::Image));

        for _ in 0..5 {
            picker.handle_input(key(KeyCode::Down));
        }
        assert_eq!(picker.selected(), ExportTarget::Current(ExportFormat::Css));
    }

    #[test]
    fn test_enter_emits_choice() {
        let mut picker = ExportPicker::new(false, PathBuf::from("out"));
        picker.handle_input(key(KeyCode::Down));

        assert_eq!(
            picker.handle_input(key(KeyCode::Enter)),
            Some(ComponentEvent::ExportChosen(ExportTarget::Current(
                ExportFormat::Json
            )))
        );
        assert!(picker.should_close());
    }
}
