//! Saved palette list panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::SavedPalette;

/// Saved palettes widget
pub struct SavedList;

impl SavedList {
    /// Render the saved palette list
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let saved = state.store.saved();

        let block = Block::default()
            .title(format!(" Saved ({}) ", saved.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        if saved.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled(
                    "No saved palettes",
                    Style::default().fg(theme.text_muted),
                )),
                Line::from(Span::styled(
                    "Press s to save",
                    Style::default().fg(theme.text_muted),
                )),
            ])
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = saved.iter().map(Self::item).collect();
        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(theme.text))
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default().with_selected(Some(state.selected_saved));
        f.render_stateful_widget(list, area, &mut list_state);
    }

    /// Name line followed by a strip of color chips.
    fn item(palette: &SavedPalette) -> ListItem<'static> {
        let chips: Vec<Span<'static>> = palette
            .colors
            .iter()
            .map(|color| Span::styled("  ", Style::default().bg(color.rgb().to_ratatui_color())))
            .collect();

        ListItem::new(vec![
            Line::from(format!(
                "{}  {}",
                palette.name,
                palette.created_at.format("%H:%M:%S")
            )),
            Line::from(chips),
        ])
    }
}
