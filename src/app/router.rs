//! Transition table
//!
//! Screens never change the view themselves; they emit an [`Intent`] and
//! [`resolve`] decides where it leads from the current view.

use super::state::{NavTab, ViewState};
use crate::lotto::evaluate;

/// A navigation request raised by a screen or the bottom bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Home: open the ticket checker
    CheckTicket,
    /// Home: show the full draw history
    ViewHistory,
    /// Home: open the number generator
    OpenGenerator,
    /// Return to the screen's parent
    Back,
    /// Result: check another ticket
    TryAgain,
    /// Check: a complete ticket number was entered
    SubmitTicket(String),
    /// Profile: jump to any view
    ChangeView(ViewState),
    /// Bottom navigation bar press
    SelectTab(NavTab),
}

/// Target view for `intent` raised on `from`, or `None` when that screen does
/// not offer the intent.
pub fn resolve(from: ViewState, intent: &Intent) -> Option<ViewState> {
    use crate::app::state::ViewState::*;

    match (from, intent) {
        (_, Intent::SelectTab(tab)) if from.shows_bottom_nav() => Some(tab.view()),

        (Home, Intent::CheckTicket) => Some(Check),
        (Home, Intent::ViewHistory) => Some(History),
        (Home, Intent::OpenGenerator) => Some(Generator),

        (History, Intent::Back) => Some(Home),

        (Profile, Intent::ChangeView(view)) => Some(*view),

        (SavedTickets, Intent::Back) => Some(Profile),

        (Check, Intent::Back) => Some(Home),
        (Check, Intent::SubmitTicket(number)) => Some(evaluate(number).into()),

        (ResultWin | ResultLoss, Intent::Back | Intent::TryAgain) => Some(Check),

        _ => None,
    }
}
