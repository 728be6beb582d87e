//! History screen implementation
//!
//! Lists past draws grouped by month with a scrollable selection.

use super::{help_bar, title_bar, wrap_next, wrap_previous, GOLD, PRIMARY};
use crate::app::router::Intent;
use crate::app::state::NavigationAction;
use crate::models::HistoryGroup;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// History screen component
#[derive(Debug)]
pub struct HistoryScreen {
    groups: Vec<HistoryGroup>,
    /// Index into the flattened draw list
    selected_index: usize,
    list_state: ListState,
}

impl HistoryScreen {
    /// Create a new history screen from month groups, newest first
    pub fn new(groups: Vec<HistoryGroup>) -> Self {
        let mut screen = Self {
            groups,
            selected_index: 0,
            list_state: ListState::default(),
        };
        screen.sync_list_state();
        screen
    }

    fn draw_count(&self) -> usize {
        self.groups.iter().map(|g| g.results.len()).sum()
    }

    /// Id of the selected draw
    pub fn selected_id(&self) -> Option<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.results.iter())
            .nth(self.selected_index)
            .map(|d| d.id.as_str())
    }

    /// Month headers occupy list rows too; map the draw index onto its row.
    fn sync_list_state(&mut self) {
        let mut row = 0;
        let mut remaining = self.selected_index;
        for group in &self.groups {
            row += 1;
            if remaining < group.results.len() {
                self.list_state.select(Some(row + remaining));
                return;
            }
            remaining -= group.results.len();
            row += group.results.len();
        }
        self.list_state.select(None);
    }

    pub fn select_previous(&mut self) {
        self.selected_index = wrap_previous(self.selected_index, self.draw_count());
        self.sync_list_state();
    }

    pub fn select_next(&mut self) {
        self.selected_index = wrap_next(self.selected_index, self.draw_count());
        self.sync_list_state();
    }

    pub fn handle_navigation(&mut self, action: NavigationAction) -> Option<Intent> {
        match action {
            NavigationAction::Up => self.select_previous(),
            NavigationAction::Down => self.select_next(),
            NavigationAction::Back => return Some(Intent::Back),
            _ => {}
        }
        None
    }

    /// Render the history screen
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        f.render_widget(title_bar("Draw History"), chunks[0]);
        self.render_list(f, chunks[1]);
        f.render_widget(
            help_bar(&[("↑↓", "Navigate"), ("Esc", "Back"), ("Tab", "Tabs")]),
            chunks[2],
        );
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let mut items: Vec<ListItem> = Vec::new();
        for group in &self.groups {
            items.push(ListItem::new(Line::from(Span::styled(
                group.month.clone(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ))));
            for draw in &group.results {
                items.push(ListItem::new(format!("  {}", draw.summary())));
            }
        }
        if items.is_empty() {
            items.push(ListItem::new("No draws available"));
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(PRIMARY).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for HistoryScreen {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::render_to_string;
    use crate::models::Fixtures;

    #[test]
    fn test_history_navigation() {
        let mut screen = HistoryScreen::new(Fixtures::builtin().history);
        assert_eq!(screen.selected_id(), Some("h1"));
        assert_eq!(screen.list_state.selected(), Some(1));

        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected_id(), Some("h3"));
        // second month header sits at row 3
        assert_eq!(screen.list_state.selected(), Some(4));

        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected_id(), Some("h1")); // wrap
        screen.select_previous();
        assert_eq!(screen.selected_id(), Some("h4")); // wrap
    }

    #[test]
    fn test_back_intent() {
        let mut screen = HistoryScreen::default();
        assert_eq!(screen.handle_navigation(NavigationAction::Back), Some(Intent::Back));
        assert_eq!(screen.handle_navigation(NavigationAction::Down), None);
        assert_eq!(screen.selected_id(), None);
    }

    #[test]
    fn test_render_groups() {
        let mut screen = HistoryScreen::new(Fixtures::builtin().history);
        let text = render_to_string(60, 20, |f| {
            let area = f.size();
            screen.render(f, area)
        });
        assert!(text.contains("October 2023"));
        assert!(text.contains("September 2023"));
        assert!(text.contains("915478"));
    }
}
