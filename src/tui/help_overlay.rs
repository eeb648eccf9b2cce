//! Help overlay widget showing all keyboard shortcuts organized by category.
//!
//! This module provides a scrollable help overlay accessible via '?' key.
//! Its content is built from the embedded help registry so the overlay and
//! the status bar hints never disagree.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::help_registry::{contexts, HelpRegistry};
use super::Theme;

/// Width of the key column in the overlay.
const KEY_COLUMN: usize = 24;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::get_help_content(&HelpRegistry::default(), &Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    /// Builds one section per help context.
    fn get_help_content(registry: &HelpRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} - Help", registry.app_name()),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for name in contexts::ORDER {
            let Some(context) = registry.get_context(name) else {
                continue;
            };

            lines.push(Line::from(Span::styled(
                format!("═══ {} ═══", context.name.to_uppercase()),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", context.description),
                Style::default().fg(theme.text_muted),
            )));
            lines.push(Line::from(""));

            for binding in registry.get_bindings(name) {
                let (keys, action) = HelpRegistry::format_binding_for_help(binding);
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<KEY_COLUMN$}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(action, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Press '?' to close help • Press ↑↓ to scroll",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(70, 80, area);
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let content = Self::get_help_content(&HelpRegistry::default(), theme);

        let visible_height = content_area.height.saturating_sub(2) as usize; // Account for borders
        let offset = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .scroll((offset, 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_context() {
        let registry = HelpRegistry::default();
        let text: Vec<String> = HelpOverlayState::get_help_content(&registry, &Theme::dark())
            .iter()
            .map(ToString::to_string)
            .collect();

        assert!(text.iter().any(|l| l.contains("═══ PALETTE ═══")));
        assert!(text.iter().any(|l| l.contains("═══ TIPS ═══")));
        assert!(text.iter().any(|l| l.contains("Space (g)")));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = HelpOverlayState::new();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        state.scroll_to_bottom();
        let bottom = state.scroll_offset;
        state.scroll_down();
        assert_eq!(state.scroll_offset, bottom);

        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }
}
