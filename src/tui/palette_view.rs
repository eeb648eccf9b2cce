//! Swatch strip for the live palette.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::ColorSlot;

/// Marker shown on locked swatches.
const LOCK_MARKER: &str = "LOCKED";

/// Palette widget renders one filled column per slot.
pub struct PaletteView;

impl PaletteView {
    /// Render the palette widget
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let slots = state.store.slots();

        let outer = Block::default()
            .title(format!(" Palette ({}) ", state.store.format().label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let count = u32::try_from(slots.len()).unwrap_or(1);
        let constraints: Vec<Constraint> = slots.iter().map(|_| Constraint::Ratio(1, count)).collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (index, (slot, column)) in slots.iter().zip(columns.iter()).enumerate() {
            let code = state
                .store
                .formatted_color(index)
                .unwrap_or_else(|_| slot.value.to_string());
            Self::render_swatch(f, *column, slot, index, &code, index == state.selected_slot);
        }
    }

    fn render_swatch(
        f: &mut Frame,
        area: Rect,
        slot: &ColorSlot,
        index: usize,
        code: &str,
        selected: bool,
    ) {
        let rgb = slot.value.rgb();
        let fill = rgb.to_ratatui_color();
        let ink = if rgb.is_light() {
            Color::Black
        } else {
            Color::White
        };

        let border_type = if selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        };
        let title = if selected {
            format!(" ▶ {} ", index + 1)
        } else {
            format!(" {} ", index + 1)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(ink).bg(fill))
            .style(Style::default().bg(fill));

        // Push the text toward the bottom of the swatch
        let padding = area.height.saturating_sub(5) as usize;
        let mut lines: Vec<Line> = vec![Line::from(""); padding];
        lines.push(Line::from(code.to_string()).style(Style::default().add_modifier(Modifier::BOLD)));
        lines.push(Line::from(if slot.locked { LOCK_MARKER } else { "" }));

        let swatch = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ink).bg(fill))
            .block(block);
        f.render_widget(swatch, area);
    }
}
