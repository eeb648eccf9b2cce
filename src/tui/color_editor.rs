//! Hex input popup for editing one slot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;
use crate::models::HexColor;

/// Longest accepted input, `#` plus six digits.
const MAX_INPUT: usize = 7;

/// Single-line hex editor bound to a slot index.
#[derive(Debug, Clone)]
pub struct ColorEditor {
    index: usize,
    input: String,
    error: Option<String>,
    closed: bool,
}

impl ColorEditor {
    /// Opens the editor prefilled with the slot's current value.
    #[must_use]
    pub fn new(index: usize, current: &HexColor) -> Self {
        Self {
            index,
            input: current.as_str().to_string(),
            error: None,
            closed: false,
        }
    }

    /// Slot being edited.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Text typed so far.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Validation message from the last submit, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn push(&mut self, c: char) {
        if self.input.len() >= MAX_INPUT {
            return;
        }
        if c == '#' && self.input.is_empty() {
            self.input.push(c);
        } else if c.is_ascii_hexdigit() {
            if self.input.is_empty() {
                self.input.push('#');
            }
            self.input.push(c);
        }
        self.error = None;
    }

    fn submit(&mut self) -> Option<ComponentEvent> {
        match HexColor::parse(&self.input) {
            Ok(value) => {
                self.closed = true;
                Some(ComponentEvent::ColorEntered {
                    index: self.index,
                    value,
                })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

impl Component for ColorEditor {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                self.closed = true;
                Some(ComponentEvent::Cancelled)
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = super::centered_rect(40, 30, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" Edit color {} ", self.index + 1))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Length(2), // Preview / error
                Constraint::Min(1),    // Help
            ])
            .split(inner);

        let input = Paragraph::new(format!("{}█", self.input))
            .style(Style::default().fg(theme.accent))
            .block(Block::default().borders(Borders::ALL).title(" Hex "));
        f.render_widget(input, chunks[0]);

        let feedback = match (&self.error, HexColor::parse(&self.input)) {
            (Some(error), _) => Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            )),
            (None, Ok(color)) => Line::from(vec![
                Span::styled(
                    "      ",
                    Style::default().bg(color.rgb().to_ratatui_color()),
                ),
                Span::styled(" preview", Style::default().fg(theme.text_muted)),
            ]),
            (None, Err(_)) => Line::from(Span::styled(
                "Type # and 6 hex digits",
                Style::default().fg(theme.text_muted),
            )),
        };
        f.render_widget(Paragraph::new(feedback), chunks[1]);

        let help = Line::from(vec![
            Span::styled(
                "Enter",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Apply  "),
            Span::styled(
                "Esc",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ]);
        f.render_widget(
            Paragraph::new(help).style(Style::default().fg(theme.text)),
            chunks[2],
        );
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editor() -> ColorEditor {
        ColorEditor::new(2, &HexColor::parse("#3357FF").unwrap())
    }

    fn type_text(editor: &mut ColorEditor, text: &str) {
        for c in text.chars() {
            editor.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_submit_valid_color() {
        let mut editor = editor();
        editor.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_text(&mut editor, "#ABCDEF");

        let event = editor.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(ComponentEvent::ColorEntered {
                index: 2,
                value: HexColor::parse("#ABCDEF").unwrap(),
            })
        );
        assert!(editor.should_close());
    }

    #[test]
    fn test_non_hex_characters_are_ignored() {
        let mut editor = editor();
        editor.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_text(&mut editor, "zz12xx34#56789");
        assert_eq!(editor.input(), "#123456");
    }

    #[test]
    fn test_incomplete_input_stays_open() {
        let mut editor = editor();
        editor.handle_input(key(KeyCode::Backspace));

        assert_eq!(editor.handle_input(key(KeyCode::Enter)), None);
        assert!(editor.error().is_some());
        assert!(!editor.should_close());
    }

    #[test]
    fn test_escape_cancels() {
        let mut editor = editor();
        assert_eq!(
            editor.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Cancelled)
        );
        assert!(editor.should_close());
    }
}
