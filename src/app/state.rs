//! Application state management
//!
//! The single view-state value, the store that owns it, the derived bottom
//! navigation predicates and keyboard-to-navigation mapping.

use crate::lotto::Outcome;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// Top-level screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    /// Latest draw and recent results
    #[default]
    Home,
    /// Draw history grouped by month
    History,
    /// Ticket overview and shortcuts
    Profile,
    /// Ticket checker keypad
    Check,
    /// Lucky number generator
    Generator,
    /// Checked ticket won
    ResultWin,
    /// Checked ticket lost
    ResultLoss,
    /// Saved tickets with status filter
    SavedTickets,
}

/// Screen component rendered for a view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    History,
    Profile,
    CheckTicket,
    Result(Outcome),
    Generator,
    SavedTickets,
}

/// Tabs of the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTab {
    Home,
    History,
    Generator,
    Profile,
}

impl ViewState {
    /// All view states
    pub fn all() -> [Self; 8] {
        [
            Self::Home,
            Self::History,
            Self::Profile,
            Self::Check,
            Self::Generator,
            Self::ResultWin,
            Self::ResultLoss,
            Self::SavedTickets,
        ]
    }

    /// Stable identifier, as used in the config file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::History => "history",
            Self::Profile => "profile",
            Self::Check => "check",
            Self::Generator => "generator",
            Self::ResultWin => "result_win",
            Self::ResultLoss => "result_loss",
            Self::SavedTickets => "saved_tickets",
        }
    }

    /// Parse an identifier. Anything unrecognised resolves to `Home`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::all()
            .into_iter()
            .find(|v| v.name() == name)
            .unwrap_or(Self::Home)
    }

    /// Screen to render for this state
    pub fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::Home,
            Self::History => Screen::History,
            Self::Profile => Screen::Profile,
            Self::Check => Screen::CheckTicket,
            Self::Generator => Screen::Generator,
            Self::ResultWin => Screen::Result(Outcome::Win),
            Self::ResultLoss => Screen::Result(Outcome::Loss),
            Self::SavedTickets => Screen::SavedTickets,
        }
    }

    /// The bottom bar is only shown on the four tab roots
    pub fn shows_bottom_nav(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::History | Self::Profile | Self::Generator
        )
    }

    /// Tab highlighted for this state. Checker and result screens count as
    /// part of Home.
    pub fn active_tab(&self) -> NavTab {
        match self {
            Self::Profile => NavTab::Profile,
            Self::History => NavTab::History,
            Self::Generator => NavTab::Generator,
            Self::Home | Self::Check | Self::ResultWin | Self::ResultLoss | Self::SavedTickets => {
                NavTab::Home
            }
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Outcome> for ViewState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::ResultWin,
            Outcome::Loss => Self::ResultLoss,
        }
    }
}

impl NavTab {
    /// Tabs in bar order
    pub fn all() -> [Self; 4] {
        [Self::Home, Self::History, Self::Generator, Self::Profile]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::History => "History",
            Self::Generator => "Lucky",
            Self::Profile => "Me",
        }
    }

    /// View state a tab press navigates to
    pub fn view(&self) -> ViewState {
        match self {
            Self::Home => ViewState::Home,
            Self::History => ViewState::History,
            Self::Generator => ViewState::Generator,
            Self::Profile => ViewState::Profile,
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// A change of the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewState,
    pub to: ViewState,
}

type Subscriber = Box<dyn FnMut(&Transition)>;

/// Owner of the current view state
///
/// Single-threaded; every change goes through [`ViewStore::transition`] and
/// is announced to subscribers.
pub struct ViewStore {
    current: ViewState,
    subscribers: Vec<Subscriber>,
}

impl ViewStore {
    /// Create a store starting at Home
    pub fn new() -> Self {
        Self::starting_at(ViewState::Home)
    }

    pub fn starting_at(view: ViewState) -> Self {
        Self {
            current: view,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    /// Register a callback run after every change of view
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&Transition) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Replace the current view. Setting the current value again changes
    /// nothing and notifies no one.
    pub fn transition(&mut self, next: ViewState) -> Option<Transition> {
        if next == self.current {
            return None;
        }
        let transition = Transition {
            from: self.current,
            to: next,
        };
        self.current = next;
        for subscriber in &mut self.subscribers {
            subscriber(&transition);
        }
        Some(transition)
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ViewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStore")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back (Esc, Backspace)
    Back,
    /// Next bottom tab (Tab)
    Next,
    /// Previous bottom tab (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert keyboard event to navigation action
pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            NavigationAction::Quit
        }

        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
        KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

        KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

        KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

        KeyCode::BackTab => NavigationAction::Previous,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                NavigationAction::Previous
            } else {
                NavigationAction::Next
            }
        }

        _ => NavigationAction::None,
    }
}

/// Whether a key quits regardless of the current screen
pub fn is_quit_key(key: &KeyEvent) -> bool {
    key_to_navigation(*key) == NavigationAction::Quit
}
