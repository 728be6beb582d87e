//! Profile screen implementation
//!
//! Ticket overview, shortcuts to saved tickets and the generator modes, and
//! the most recent tickets.

use super::{help_bar, title_bar, wrap_next, wrap_previous, GOLD, PRIMARY};
use crate::app::router::Intent;
use crate::app::state::{NavigationAction, ViewState};
use crate::models::{SavedTicket, TicketStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Selectable entries on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEntry {
    SavedTickets,
    RandomNumbers,
    BirthdayNumbers,
    PhoneMagic,
}

impl ProfileEntry {
    pub fn all() -> [Self; 4] {
        [
            Self::SavedTickets,
            Self::RandomNumbers,
            Self::BirthdayNumbers,
            Self::PhoneMagic,
        ]
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Self::SavedTickets => "My tickets",
            Self::RandomNumbers => "Random numbers",
            Self::BirthdayNumbers => "Birthday lucky numbers",
            Self::PhoneMagic => "Phone number magic",
        }
    }

    /// Every generator shortcut opens the generator on its default mode
    pub fn target(&self) -> ViewState {
        match self {
            Self::SavedTickets => ViewState::SavedTickets,
            Self::RandomNumbers | Self::BirthdayNumbers | Self::PhoneMagic => ViewState::Generator,
        }
    }
}

/// Profile screen component
#[derive(Debug)]
pub struct ProfileScreen {
    recent_tickets: Vec<SavedTicket>,
    active_ticket_count: usize,
    selected_index: usize,
    list_state: ListState,
}

impl ProfileScreen {
    pub fn new(recent_tickets: Vec<SavedTicket>, active_ticket_count: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            recent_tickets,
            active_ticket_count,
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected_entry(&self) -> ProfileEntry {
        ProfileEntry::all()[self.selected_index]
    }

    pub fn select_previous(&mut self) {
        self.selected_index = wrap_previous(self.selected_index, ProfileEntry::all().len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        self.selected_index = wrap_next(self.selected_index, ProfileEntry::all().len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn handle_navigation(&mut self, action: NavigationAction) -> Option<Intent> {
        match action {
            NavigationAction::Up => self.select_previous(),
            NavigationAction::Down => self.select_next(),
            NavigationAction::Select => {
                return Some(Intent::ChangeView(self.selected_entry().target()))
            }
            _ => {}
        }
        None
    }

    /// Render the profile screen
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Overview
                Constraint::Length(6), // Menu
                Constraint::Min(3),    // Recent tickets
                Constraint::Length(3), // Help
            ])
            .split(area);

        f.render_widget(title_bar("My Profile"), chunks[0]);

        let overview = Paragraph::new(vec![
            Line::from(Span::styled(
                "My tickets",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} active tickets", self.active_ticket_count)),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD))
                .title(" Overview "),
        );
        f.render_widget(overview, chunks[1]);

        let items: Vec<ListItem> = ProfileEntry::all()
            .iter()
            .map(|e| ListItem::new(e.display_text()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(PRIMARY).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(menu, chunks[2], &mut self.list_state);

        self.render_recent(f, chunks[3]);

        f.render_widget(
            help_bar(&[("↑↓", "Select"), ("Enter", "Open"), ("Tab", "Tabs")]),
            chunks[4],
        );
    }

    fn render_recent(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .recent_tickets
            .iter()
            .map(|t| {
                let status_style = match t.status {
                    TicketStatus::Won => Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    TicketStatus::Pending | TicketStatus::Lost => Style::default().fg(Color::Gray),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(t.number.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!("  {}  ", t.draw_label())),
                    Span::styled(t.status.label(), status_style),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent tickets "),
        );
        f.render_widget(list, area);
    }
}
