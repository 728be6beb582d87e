//! Data models module
//!
//! Draw results, saved tickets and the compiled-in fixture data the screens
//! display.

pub mod draw;
pub mod fixtures;
pub mod ticket;

// Re-export commonly used types
pub use draw::{HistoryGroup, LotteryResult};
pub use fixtures::Fixtures;
pub use ticket::{SavedTicket, TicketFilter, TicketStatus};
