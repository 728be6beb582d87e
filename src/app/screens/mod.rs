//! TUI screen components
//!
//! One component per top-level screen plus the bottom navigation bar. Screens
//! render their own data and report navigation requests as
//! [`Intent`](crate::app::router::Intent)s; they never change the view.

pub mod bottom_nav;
pub mod check;
pub mod generator;
pub mod history;
pub mod home;
pub mod profile;
pub mod result;
pub mod saved;

pub use bottom_nav::render_bottom_nav;
pub use check::CheckScreen;
pub use generator::GeneratorScreen;
pub use history::HistoryScreen;
pub use home::{HomeAction, HomeScreen};
pub use profile::{ProfileEntry, ProfileScreen};
pub use result::{ResultAction, ResultScreen};
pub use saved::SavedTicketsScreen;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Brand colour used for titles and highlights
pub const PRIMARY: Color = Color::Magenta;
/// Accent used for prize numbers
pub const GOLD: Color = Color::Yellow;

/// Bordered, centred screen title
pub fn title_bar(title: &str) -> Paragraph<'_> {
    Paragraph::new(title)
        .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PRIMARY)),
        )
}

/// Key hints, e.g. `[("↑↓", "Navigate"), ("Esc", "Back")]`
pub fn help_bar(keys: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(
            *key,
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", label)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD)),
        )
}

/// Move a wrapping selection one step back
pub(crate) fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index > 0 {
        index - 1
    } else {
        len - 1
    }
}

/// Move a wrapping selection one step forward
pub(crate) fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 || index + 1 >= len {
        0
    } else {
        index + 1
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Frame, Terminal};

    /// Render into an in-memory terminal and return the screen text
    pub fn render_to_string<F>(width: u16, height: u16, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_selection() {
        assert_eq!(wrap_next(0, 3), 1);
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_previous(0, 3), 2);
        assert_eq!(wrap_previous(1, 3), 0);
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_previous(0, 0), 0);
    }
}
