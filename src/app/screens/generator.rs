//! Lucky number generator screen
//!
//! Mode tabs (birthday, phone number, random), a mode-specific hint and the
//! generated numbers.

use super::{help_bar, title_bar, GOLD, PRIMARY};
use crate::app::router::Intent;
use crate::app::state::NavigationAction;
use crate::lotto::{generate, GeneratorMode};
use crate::util::format::spaced_digits;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use tracing::debug;

/// Generator screen component
#[derive(Debug, Default)]
pub struct GeneratorScreen {
    mode: GeneratorMode,
    generated: Option<[u8; 6]>,
}

impl GeneratorScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GeneratorMode {
        self.mode
    }

    pub fn generated(&self) -> Option<[u8; 6]> {
        self.generated
    }

    /// Switch mode; any displayed numbers are cleared
    pub fn set_mode(&mut self, mode: GeneratorMode) {
        if mode != self.mode {
            self.mode = mode;
            self.generated = None;
        }
    }

    pub fn generate(&mut self) {
        let numbers = generate(self.mode);
        debug!(mode = self.mode.title(), ?numbers, "generated lucky numbers");
        self.generated = Some(numbers);
    }

    /// The generator has no back target of its own; only the bottom bar
    /// leaves it.
    pub fn handle_navigation(&mut self, action: NavigationAction) -> Option<Intent> {
        match action {
            NavigationAction::Left => self.set_mode(self.mode.previous()),
            NavigationAction::Right => self.set_mode(self.mode.next()),
            NavigationAction::Select => self.generate(),
            _ => {}
        }
        None
    }

    /// Render the generator
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Mode tabs
                Constraint::Length(3), // Hint
                Constraint::Min(5),    // Output
                Constraint::Length(3), // Help
            ])
            .split(area);

        f.render_widget(title_bar("Lucky Number Generator"), chunks[0]);

        let titles: Vec<Line> = GeneratorMode::all()
            .iter()
            .map(|m| Line::from(m.title()))
            .collect();
        let selected = GeneratorMode::all()
            .iter()
            .position(|m| *m == self.mode)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .block(Block::default().borders(Borders::ALL).title(" Mode "))
            .highlight_style(Style::default().fg(Color::Black).bg(PRIMARY).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[1]);

        f.render_widget(
            Paragraph::new(self.mode.prompt())
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        let output = match self.generated {
            Some(numbers) => vec![
                Line::from(Span::styled("Royal Thai Blessing", Style::default().fg(GOLD))),
                Line::from(""),
                Line::from(Span::styled(
                    spaced_digits(numbers.iter()),
                    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
                )),
            ],
            None => vec![Line::from(Span::styled(
                "Press Enter to generate",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        f.render_widget(
            Paragraph::new(output)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GOLD))
                        .title(" Your lucky numbers "),
                ),
            chunks[3],
        );

        f.render_widget(
            help_bar(&[("←→", "Mode"), ("Enter", "Generate"), ("Tab", "Tabs")]),
            chunks[4],
        );
    }
}
