//! Saved tickets screen implementation
//!
//! The user's tickets under a status filter (all, pending, won, lost).

use super::{help_bar, title_bar, wrap_next, wrap_previous, GOLD, PRIMARY};
use crate::app::router::Intent;
use crate::app::state::NavigationAction;
use crate::models::{SavedTicket, TicketFilter, TicketStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Tabs},
    Frame,
};

/// Saved tickets screen component
#[derive(Debug)]
pub struct SavedTicketsScreen {
    tickets: Vec<SavedTicket>,
    filter: TicketFilter,
    selected_index: usize,
    list_state: ListState,
}

impl SavedTicketsScreen {
    pub fn new(tickets: Vec<SavedTicket>) -> Self {
        let mut screen = Self {
            tickets,
            filter: TicketFilter::default(),
            selected_index: 0,
            list_state: ListState::default(),
        };
        screen.reset_selection();
        screen
    }

    pub fn filter(&self) -> TicketFilter {
        self.filter
    }

    /// Tickets shown under the current filter
    pub fn visible(&self) -> Vec<&SavedTicket> {
        self.filter.apply(&self.tickets)
    }

    pub fn selected_ticket(&self) -> Option<&SavedTicket> {
        self.visible().get(self.selected_index).copied()
    }

    pub fn set_filter(&mut self, filter: TicketFilter) {
        self.filter = filter;
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        let any = !self.visible().is_empty();
        self.list_state.select(any.then_some(0));
    }

    pub fn select_previous(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_index = wrap_previous(self.selected_index, len);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_index = wrap_next(self.selected_index, len);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn handle_navigation(&mut self, action: NavigationAction) -> Option<Intent> {
        match action {
            NavigationAction::Left => self.set_filter(self.filter.previous()),
            NavigationAction::Right => self.set_filter(self.filter.next()),
            NavigationAction::Up => self.select_previous(),
            NavigationAction::Down => self.select_next(),
            NavigationAction::Back => return Some(Intent::Back),
            _ => {}
        }
        None
    }

    /// Render the saved tickets screen
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Filter tabs
                Constraint::Min(4),    // Tickets
                Constraint::Length(3), // Help
            ])
            .split(area);

        f.render_widget(title_bar("My Tickets"), chunks[0]);

        let titles: Vec<Line> = TicketFilter::all()
            .iter()
            .map(|t| Line::from(t.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.filter.index())
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(PRIMARY).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[1]);

        let items: Vec<ListItem> = self.visible().into_iter().map(ticket_item).collect();
        let list = if items.is_empty() {
            List::new(vec![ListItem::new("No tickets here")])
        } else {
            List::new(items)
        }
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(PRIMARY).fg(Color::Black))
        .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);

        f.render_widget(
            help_bar(&[("←→", "Filter"), ("↑↓", "Select"), ("Esc", "Back")]),
            chunks[3],
        );
    }
}

fn ticket_item(ticket: &SavedTicket) -> ListItem<'static> {
    let status_style = match ticket.status {
        TicketStatus::Won => Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        TicketStatus::Pending => Style::default().fg(PRIMARY),
        TicketStatus::Lost => Style::default().fg(Color::DarkGray),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(ticket.number.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(ticket.status.label(), status_style),
    ])];
    let mut detail = ticket.draw_label();
    if let Some(prize) = ticket.prize_label() {
        detail.push_str("  ");
        detail.push_str(&prize);
    }
    lines.push(Line::from(Span::styled(detail, Style::default().fg(Color::Gray))));
    ListItem::new(lines)
}
