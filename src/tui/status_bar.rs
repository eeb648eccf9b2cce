//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::{self, HelpRegistry};
use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if !state.status_message.is_empty() {
            let style = state
                .status_color_override
                .map_or_else(Style::default, |color| Style::default().fg(color));
            Line::from(Span::styled(state.status_message.clone(), style))
        } else {
            Self::get_hints_line(state, theme)
        };

        let selected = state
            .store
            .slot(state.selected_slot)
            .map(|slot| {
                Line::from(vec![
                    Span::styled("Selected: ", Style::default().fg(theme.primary)),
                    Span::styled(
                        format!("{} ", state.selected_slot + 1),
                        Style::default().fg(theme.text),
                    ),
                    Span::styled(slot.value.to_string(), Style::default().fg(theme.accent)),
                    Span::styled(
                        if slot.locked { "  (locked)" } else { "" },
                        Style::default().fg(theme.text_muted),
                    ),
                    Span::styled("  Harmony: ", Style::default().fg(theme.primary)),
                    Span::styled(
                        state.store.harmony_rule().label(),
                        Style::default().fg(theme.text),
                    ),
                ])
            })
            .unwrap_or_default();

        let status = Paragraph::new(vec![first_line, selected])
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Get a line of contextual hints from the help registry
    fn get_hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context_name = Self::get_current_context(state);
        let registry = HelpRegistry::default();

        // Get top priority hints for this context (limit to 8 for space)
        let hints = registry.format_status_bar_hints(context_name, 8);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }

    /// Get the current context name based on application state
    pub(super) const fn get_current_context(state: &AppState) -> &'static str {
        match &state.active_popup {
            Some(PopupType::ColorEditor) => help_registry::contexts::COLOR_EDITOR,
            Some(PopupType::ExportPicker) => help_registry::contexts::EXPORT_PICKER,
            Some(PopupType::HelpOverlay) => help_registry::contexts::HELP,
            None => help_registry::contexts::MAIN,
        }
    }
}
