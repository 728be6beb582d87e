//! Home screen implementation
//!
//! Latest draw as a hero card, shortcuts to the checker, history and
//! generator, and the remaining recent draws.

use super::{help_bar, title_bar, wrap_next, wrap_previous, GOLD, PRIMARY};
use crate::app::router::Intent;
use crate::app::state::NavigationAction;
use crate::models::{draw::FIRST_PRIZE_TAG, LotteryResult};
use crate::util::format::spaced_digits;
use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Shortcuts offered on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    CheckTicket,
    ViewHistory,
    OpenGenerator,
}

impl HomeAction {
    pub fn all() -> [Self; 3] {
        [Self::CheckTicket, Self::ViewHistory, Self::OpenGenerator]
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Self::CheckTicket => "Check my ticket",
            Self::ViewHistory => "View all draws",
            Self::OpenGenerator => "AI lucky number tool",
        }
    }

    pub fn intent(&self) -> Intent {
        match self {
            Self::CheckTicket => Intent::CheckTicket,
            Self::ViewHistory => Intent::ViewHistory,
            Self::OpenGenerator => Intent::OpenGenerator,
        }
    }
}

/// Home screen component
#[derive(Debug)]
pub struct HomeScreen {
    draws: Vec<LotteryResult>,
    /// Feed timestamp shown under the hero card
    last_updated: Option<NaiveDateTime>,
    selected_index: usize,
    list_state: ListState,
}

impl HomeScreen {
    /// Create a home screen over the draws, newest first
    pub fn new(draws: Vec<LotteryResult>, last_updated: Option<NaiveDateTime>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            draws,
            last_updated,
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected_action(&self) -> HomeAction {
        HomeAction::all()[self.selected_index]
    }

    pub fn select_previous(&mut self) {
        self.selected_index = wrap_previous(self.selected_index, HomeAction::all().len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        self.selected_index = wrap_next(self.selected_index, HomeAction::all().len());
        self.list_state.select(Some(self.selected_index));
    }

    /// Handle a navigation key; Enter activates the selected shortcut
    pub fn handle_navigation(&mut self, action: NavigationAction) -> Option<Intent> {
        match action {
            NavigationAction::Up => self.select_previous(),
            NavigationAction::Down => self.select_next(),
            NavigationAction::Select => return Some(self.selected_action().intent()),
            _ => {}
        }
        None
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(8), // Hero card
                Constraint::Length(5), // Shortcuts
                Constraint::Min(3),    // Recent draws
                Constraint::Length(3), // Help
            ])
            .split(area);

        f.render_widget(title_bar("Thai Lottery Results"), chunks[0]);
        self.render_hero(f, chunks[1]);
        self.render_actions(f, chunks[2]);
        self.render_recent(f, chunks[3]);
        f.render_widget(
            help_bar(&[("↑↓", "Select"), ("Enter", "Open"), ("Tab", "Tabs"), ("Q", "Quit")]),
            chunks[4],
        );
    }

    fn render_hero(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GOLD))
            .title(" Latest draw ");

        let mut lines = match self.draws.first() {
            Some(latest) => vec![
                Line::from(Span::styled(FIRST_PRIZE_TAG, Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    spaced_digits(latest.number.chars()),
                    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
                )),
                Line::from(latest.draw_date_full.clone()),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Front 3 ", Style::default().fg(GOLD)),
                    Span::raw(latest.top3.clone()),
                    Span::styled("  Back 3 ", Style::default().fg(GOLD)),
                    Span::raw(latest.bottom3.clone()),
                    Span::styled("  Back 2 ", Style::default().fg(PRIMARY)),
                    Span::styled(
                        latest.bottom2.clone(),
                        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
                    ),
                ]),
            ],
            None => vec![Line::from("No draws published yet")],
        };
        if let Some(updated) = self.last_updated {
            lines.push(Line::from(Span::styled(
                format!("Updated {}", updated.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::DarkGray),
            )));
        }

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            area,
        );
    }

    fn render_actions(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = HomeAction::all()
            .iter()
            .map(|a| ListItem::new(a.display_text()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(PRIMARY).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_recent(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .draws
            .iter()
            .skip(1)
            .map(|d| ListItem::new(d.summary()))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent draws "),
        );
        f.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::render_to_string;
    use crate::models::Fixtures;

    #[test]
    fn test_action_navigation() {
        let mut screen = HomeScreen::new(Fixtures::builtin().draws, None);
        assert_eq!(screen.selected_action(), HomeAction::CheckTicket);
        screen.select_next();
        assert_eq!(screen.selected_action(), HomeAction::ViewHistory);
        screen.select_previous();
        screen.select_previous();
        assert_eq!(screen.selected_action(), HomeAction::OpenGenerator);
    }

    #[test]
    fn test_select_emits_intent() {
        let mut screen = HomeScreen::new(Vec::new(), None);
        assert_eq!(
            screen.handle_navigation(NavigationAction::Select),
            Some(Intent::CheckTicket)
        );
        screen.handle_navigation(NavigationAction::Down);
        assert_eq!(
            screen.handle_navigation(NavigationAction::Select),
            Some(Intent::ViewHistory)
        );
        assert_eq!(screen.handle_navigation(NavigationAction::Back), None);
    }

    #[test]
    fn test_render_shows_latest_draw() {
        let mut screen = HomeScreen::new(Fixtures::builtin().draws, None);
        let text = render_to_string(60, 30, |f| {
            let area = f.size();
            screen.render(f, area)
        });
        assert!(text.contains("1 2 3 4 5 6"));
        assert!(text.contains("Check my ticket"));
        assert!(text.contains("987654"));
        assert!(!text.contains("Updated"));
    }

    #[test]
    fn test_render_shows_feed_timestamp() {
        let updated = NaiveDateTime::parse_from_str("2023-11-01 16:05:12", "%Y-%m-%d %H:%M:%S").unwrap();
        let mut screen = HomeScreen::new(Fixtures::builtin().draws, Some(updated));
        let text = render_to_string(60, 30, |f| {
            let area = f.size();
            screen.render(f, area)
        });
        assert!(text.contains("Updated 2023-11-01 16:05"));
    }
}
