//! Saved ticket data models

use crate::util::format::format_baht;
use chrono::NaiveDate;

/// Draw state of a saved ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Pending,
    Won,
    Lost,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Won => "Won",
            Self::Lost => "No win",
        }
    }
}

/// A ticket the user keeps in the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedTicket {
    pub id: String,
    pub number: String,
    /// Draw the ticket takes part in (upcoming when pending)
    pub draw_date: NaiveDate,
    pub added_on: NaiveDate,
    pub status: TicketStatus,
    /// Prize tier label, e.g. `1st prize`
    pub prize_tier: Option<String>,
    /// Prize in whole baht
    pub prize_amount: Option<u64>,
}

impl SavedTicket {
    /// Prize line, e.g. `1st prize (฿6,000,000)`, for won tickets
    pub fn prize_label(&self) -> Option<String> {
        match (&self.prize_tier, self.prize_amount) {
            (Some(tier), Some(amount)) => Some(format!("{} ({})", tier, format_baht(amount))),
            (Some(tier), None) => Some(tier.clone()),
            (None, Some(amount)) => Some(format_baht(amount)),
            (None, None) => None,
        }
    }

    /// Date label matching the status: next draw for pending tickets
    pub fn draw_label(&self) -> String {
        let prefix = match self.status {
            TicketStatus::Pending => "Next draw",
            TicketStatus::Won | TicketStatus::Lost => "Drawn",
        };
        format!("{}: {}", prefix, self.draw_date.format("%Y-%m-%d"))
    }
}

/// Tabs on the saved tickets screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketFilter {
    #[default]
    All,
    Pending,
    Won,
    Lost,
}

impl TicketFilter {
    /// Filters in tab order
    pub fn all() -> [Self; 4] {
        [Self::All, Self::Pending, Self::Won, Self::Lost]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    pub fn matches(&self, status: TicketStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TicketStatus::Pending,
            Self::Won => status == TicketStatus::Won,
            Self::Lost => status == TicketStatus::Lost,
        }
    }

    /// Tickets visible under this filter, in their original order
    pub fn apply<'a>(&self, tickets: &'a [SavedTicket]) -> Vec<&'a SavedTicket> {
        tickets.iter().filter(|t| self.matches(t.status)).collect()
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
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
