//! Ticket checker screen
//!
//! Six digit slots filled from a numeric keypad. The check button is only
//! enabled once all six digits are entered.

use super::{help_bar, title_bar, GOLD, PRIMARY};
use crate::app::router::Intent;
use crate::lotto::KeypadBuffer;
use crate::TICKET_LENGTH;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEYPAD_ROWS: [&str; 4] = ["1   2   3", "4   5   6", "7   8   9", "    0   ⌫"];

/// Ticket checker component
#[derive(Debug, Default)]
pub struct CheckScreen {
    keypad: KeypadBuffer,
}

impl CheckScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keypad(&self) -> &KeypadBuffer {
        &self.keypad
    }

    /// Handle a key press. Digits and Backspace edit the buffer, Enter
    /// submits a complete ticket and Esc leaves the checker.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.keypad.press(c);
                None
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.keypad.backspace();
                None
            }
            KeyCode::Enter => self.keypad.submission().map(Intent::SubmitTicket),
            KeyCode::Esc => Some(Intent::Back),
            _ => None,
        }
    }

    /// Render the checker
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Slots
                Constraint::Min(6),    // Keypad
                Constraint::Length(3), // Check button
                Constraint::Length(3), // Help
            ])
            .split(area);

        f.render_widget(title_bar("Check Ticket"), chunks[0]);
        f.render_widget(self.slots(), chunks[1]);

        let keypad_lines: Vec<Line> = KEYPAD_ROWS
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().add_modifier(Modifier::BOLD))))
            .collect();
        f.render_widget(
            Paragraph::new(keypad_lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Keypad ")),
            chunks[2],
        );

        let (label, style) = if self.keypad.is_complete() {
            (
                "[ Check now ]",
                Style::default().fg(Color::Black).bg(PRIMARY).add_modifier(Modifier::BOLD),
            )
        } else {
            ("[ Enter 6 digits ]", Style::default().fg(Color::DarkGray))
        };
        f.render_widget(
            Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );

        f.render_widget(
            help_bar(&[("0-9", "Digit"), ("⌫", "Delete"), ("Enter", "Check"), ("Esc", "Back")]),
            chunks[4],
        );
    }

    fn slots(&self) -> Paragraph<'static> {
        let mut spans = Vec::with_capacity(TICKET_LENGTH);
        for i in 0..TICKET_LENGTH {
            let span = match self.keypad.slot(i) {
                Some(d) => Span::styled(
                    format!("[{}]", d),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                None => Span::styled("[_]", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Your number "))
    }
}
