//! Check result screen implementation
//!
//! Shows the outcome of a checked ticket: the prize breakdown for a win, or
//! the submitted number next to the winning number for a loss.

use super::{help_bar, GOLD, PRIMARY};
use crate::app::router::Intent;
use crate::app::state::NavigationAction;
use crate::lotto::{evaluator::JACKPOT_NUMBER, Outcome, PrizeBreakdown};
use crate::models::LotteryResult;
use crate::util::format::spaced_digits;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

/// Buttons below the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    TryAgain,
    BackHome,
}

impl ResultAction {
    pub fn all() -> [Self; 2] {
        [Self::TryAgain, Self::BackHome]
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Self::TryAgain => "Try again",
            Self::BackHome => "Back to home",
        }
    }

    /// Both buttons lead back to the checker
    pub fn intent(&self) -> Intent {
        match self {
            Self::TryAgain => Intent::TryAgain,
            Self::BackHome => Intent::Back,
        }
    }
}

/// Result screen component
#[derive(Debug)]
pub struct ResultScreen {
    outcome: Outcome,
    ticket: Option<String>,
    /// Draw the ticket was checked against
    draw: Option<LotteryResult>,
    selected_action: ResultAction,
}

impl ResultScreen {
    pub fn new(outcome: Outcome, ticket: Option<String>, draw: Option<LotteryResult>) -> Self {
        Self {
            outcome,
            ticket,
            draw,
            selected_action: ResultAction::TryAgain,
        }
    }

    pub fn selected_action(&self) -> ResultAction {
        self.selected_action
    }

    pub fn select_next_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions.iter().position(|a| *a == self.selected_action).unwrap_or(0);
        self.selected_action = actions[(current + 1) % actions.len()];
    }

    pub fn select_previous_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions.iter().position(|a| *a == self.selected_action).unwrap_or(0);
        self.selected_action = actions[(current + actions.len() - 1) % actions.len()];
    }

    pub fn handle_navigation(&mut self, action: NavigationAction) -> Option<Intent> {
        match action {
            NavigationAction::Left | NavigationAction::Up => self.select_previous_action(),
            NavigationAction::Right | NavigationAction::Down => self.select_next_action(),
            NavigationAction::Select => return Some(self.selected_action.intent()),
            NavigationAction::Back => return Some(Intent::Back),
            _ => {}
        }
        None
    }

    /// Number shown as "your ticket"; a result reached without a check shows
    /// the jackpot number on a win.
    fn ticket_number(&self) -> &str {
        match (&self.ticket, self.outcome) {
            (Some(ticket), _) => ticket,
            (None, Outcome::Win) => JACKPOT_NUMBER,
            (None, Outcome::Loss) => "------",
        }
    }

    /// Render the result screen
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Headline
                Constraint::Min(6),    // Details
                Constraint::Length(3), // Actions
                Constraint::Length(3), // Help
            ])
            .split(area);

        self.render_headline(f, chunks[0]);
        match self.outcome {
            Outcome::Win => self.render_prize(f, chunks[1]),
            Outcome::Loss => self.render_comparison(f, chunks[1]),
        }
        self.render_actions(f, chunks[2]);
        f.render_widget(
            help_bar(&[("←→", "Navigate"), ("Enter", "Select"), ("Esc", "Back")]),
            chunks[3],
        );
    }

    fn render_headline(&self, f: &mut Frame, area: Rect) {
        let (headline, subline, color) = match self.outcome {
            Outcome::Win => ("Congratulations!", "You won the first prize", GOLD),
            Outcome::Loss => ("Not this time", "Better luck in the next draw", Color::Gray),
        };

        let text = vec![
            Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(subline),
            Line::from(Span::styled(
                spaced_digits(self.ticket_number().chars()),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )),
        ];

        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            area,
        );
    }

    fn render_prize(&self, f: &mut Frame, area: Rect) {
        let mut rows: Vec<Row> = PrizeBreakdown::first_prize()
            .display_lines()
            .into_iter()
            .map(|(label, amount)| Row::new(vec![label.to_string(), amount]))
            .collect();
        if let Some(draw) = &self.draw {
            rows.push(Row::new(vec!["Draw".to_string(), draw.draw_date_full.clone()]));
        }

        let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(12)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GOLD))
                    .title(" Prize "),
            )
            .column_spacing(2);
        f.render_widget(table, area);
    }

    fn render_comparison(&self, f: &mut Frame, area: Rect) {
        let winning = self
            .draw
            .as_ref()
            .map(|d| (d.number.as_str(), d.draw_date_full.as_str()));

        let mut rows = vec![Row::new(vec![
            "Your number".to_string(),
            self.ticket_number().to_string(),
        ])];
        match winning {
            Some((number, date)) => {
                rows.push(Row::new(vec!["Winning number".to_string(), number.to_string()]));
                rows.push(Row::new(vec!["Draw".to_string(), date.to_string()]));
            }
            None => rows.push(Row::new(vec!["Winning number".to_string(), "-".to_string()])),
        }

        let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(12)])
            .block(Block::default().borders(Borders::ALL).title(" Comparison "))
            .column_spacing(2);
        f.render_widget(table, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let action_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (action, chunk) in ResultAction::all().iter().zip(action_chunks.iter()) {
            let selected = *action == self.selected_action;
            let style = if selected {
                Style::default().fg(Color::Black).bg(PRIMARY).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let button = Paragraph::new(action.display_text())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(if selected {
                    Style::default().fg(PRIMARY)
                } else {
                    Style::default().fg(Color::White)
                }));
            f.render_widget(button, *chunk);
        }
    }
}
