//! Main application controller
//!
//! Owns the view store and one component per screen. Keys go to the screen
//! for the current view, the screen answers with an intent and the router
//! decides the next view.

use crate::{
    app::{
        router::{resolve, Intent},
        screens::{
            render_bottom_nav, CheckScreen, GeneratorScreen, HistoryScreen, HomeScreen,
            ProfileScreen, ResultScreen, SavedTicketsScreen,
        },
        state::{is_quit_key, key_to_navigation, NavTab, NavigationAction, Screen, ViewState, ViewStore},
        tui::Tui,
    },
    config::AppConfig,
    lotto::{KeypadBuffer, Outcome},
    models::Fixtures,
    Result,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{debug, info};

/// Smallest terminal the screens are laid out for
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 20;

/// TUI application controller
pub struct App {
    config: AppConfig,
    fixtures: Fixtures,
    store: ViewStore,
    /// Ticket submitted from the checker, consumed by the next result screen
    last_ticket: Option<String>,
    should_quit: bool,
    home: HomeScreen,
    history: HistoryScreen,
    profile: ProfileScreen,
    check: CheckScreen,
    generator: GeneratorScreen,
    result: ResultScreen,
    saved: SavedTicketsScreen,
}

impl App {
    /// Create the application at the configured start view
    pub fn new(config: AppConfig, fixtures: Fixtures) -> Self {
        let start = config.start_view();
        let mut store = ViewStore::starting_at(start);
        store.subscribe(|t| debug!(from = %t.from, to = %t.to, "view transition"));

        let mut app = Self {
            home: HomeScreen::new(fixtures.draws.clone(), fixtures.last_updated),
            history: HistoryScreen::new(fixtures.history.clone()),
            profile: ProfileScreen::new(fixtures.recent_tickets.clone(), fixtures.active_ticket_count),
            check: CheckScreen::new(),
            generator: GeneratorScreen::new(),
            result: ResultScreen::new(Outcome::Win, None, None),
            saved: SavedTicketsScreen::new(fixtures.saved_tickets.clone()),
            config,
            fixtures,
            store,
            last_ticket: None,
            should_quit: false,
        };
        app.mount(start);
        app
    }

    pub fn view(&self) -> ViewState {
        self.store.current()
    }

    pub fn current_screen(&self) -> Screen {
        self.view().screen()
    }

    pub fn shows_bottom_nav(&self) -> bool {
        self.view().shows_bottom_nav()
    }

    pub fn active_tab(&self) -> NavTab {
        self.view().active_tab()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Checker keypad contents
    pub fn keypad(&self) -> &KeypadBuffer {
        self.check.keypad()
    }

    pub fn generator(&self) -> &GeneratorScreen {
        &self.generator
    }

    pub fn saved_tickets(&self) -> &SavedTicketsScreen {
        &self.saved
    }

    /// Move to `next`. Entering a different view mounts its screen fresh.
    pub fn set_view(&mut self, next: ViewState) {
        if self.store.transition(next).is_some() {
            self.mount(next);
        }
    }

    fn mount(&mut self, view: ViewState) {
        match view.screen() {
            Screen::Home => {
                self.home = HomeScreen::new(self.fixtures.draws.clone(), self.fixtures.last_updated)
            }
            Screen::History => self.history = HistoryScreen::new(self.fixtures.history.clone()),
            Screen::Profile => {
                self.profile = ProfileScreen::new(
                    self.fixtures.recent_tickets.clone(),
                    self.fixtures.active_ticket_count,
                )
            }
            Screen::CheckTicket => self.check = CheckScreen::new(),
            Screen::Generator => self.generator = GeneratorScreen::new(),
            Screen::Result(outcome) => {
                self.result = ResultScreen::new(
                    outcome,
                    self.last_ticket.take(),
                    self.fixtures.latest().cloned(),
                )
            }
            Screen::SavedTickets => {
                self.saved = SavedTicketsScreen::new(self.fixtures.saved_tickets.clone())
            }
        }
    }

    /// Apply an intent raised on the current view
    pub fn dispatch(&mut self, intent: Intent) {
        let from = self.view();
        match resolve(from, &intent) {
            Some(next) => {
                if let Intent::SubmitTicket(number) = intent {
                    self.last_ticket = Some(number);
                }
                self.set_view(next);
            }
            None => debug!(view = %from, ?intent, "intent not offered"),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_quit_key(&key) {
            self.quit();
            return;
        }

        let view = self.view();
        if view == ViewState::Home && key.code == KeyCode::Esc {
            self.quit();
            return;
        }

        let action = key_to_navigation(key);
        if view.shows_bottom_nav() {
            let tab = match action {
                NavigationAction::Next => Some(view.active_tab().next()),
                NavigationAction::Previous => Some(view.active_tab().previous()),
                _ => None,
            };
            if let Some(tab) = tab {
                self.dispatch(Intent::SelectTab(tab));
                return;
            }
        }

        let intent = match view.screen() {
            Screen::Home => self.home.handle_navigation(action),
            Screen::History => self.history.handle_navigation(action),
            Screen::Profile => self.profile.handle_navigation(action),
            Screen::CheckTicket => self.check.handle_key(key),
            Screen::Generator => self.generator.handle_navigation(action),
            Screen::Result(_) => self.result.handle_navigation(action),
            Screen::SavedTickets => self.saved.handle_navigation(action),
        };

        if let Some(intent) = intent {
            self.dispatch(intent);
        }
    }

    /// Draw the current screen, plus the bottom bar where it is shown
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            render_too_small(f);
            return;
        }

        let view = self.view();
        let (area, nav_area) = if view.shows_bottom_nav() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(size);
            (chunks[0], Some(chunks[1]))
        } else {
            (size, None)
        };

        match view.screen() {
            Screen::Home => self.home.render(f, area),
            Screen::History => self.history.render(f, area),
            Screen::Profile => self.profile.render(f, area),
            Screen::CheckTicket => self.check.render(f, area),
            Screen::Generator => self.generator.render(f, area),
            Screen::Result(_) => self.result.render(f, area),
            Screen::SavedTickets => self.saved.render(f, area),
        }

        if let Some(nav_area) = nav_area {
            render_bottom_nav(f, nav_area, view.active_tab());
        }
    }

    /// Run the event loop until a quit key is pressed
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = self.config.tick_rate();
        info!(view = %self.view(), "starting event loop");

        while !self.should_quit {
            tui.draw(|f| self.render(f))?;
            if let Some(key) = tui.next_key(tick_rate)? {
                self.handle_key(key);
            }
        }

        info!("event loop finished");
        Ok(())
    }
}

fn render_too_small(f: &mut Frame) {
    let size = f.size();
    let message = format!(
        "Terminal too small: {}x{}. Resize to at least {}x{}.",
        size.width, size.height, MIN_WIDTH, MIN_HEIGHT
    );
    let notice = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, size);
}
