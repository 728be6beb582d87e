//! Compiled-in sample data
//!
//! Stands in for a real content source. A results feed file, when configured,
//! replaces the draw lists; saved tickets always come from here.

use super::draw::{HistoryGroup, LotteryResult};
use super::ticket::{SavedTicket, TicketStatus};
use crate::config::{feed::ResultsFeed, AppConfig};
use crate::error::is_recoverable;
use crate::Result;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

/// Everything the screens display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    /// Home feed draws, newest first; the first one is the hero card
    pub draws: Vec<LotteryResult>,
    /// History screen, grouped by month
    pub history: Vec<HistoryGroup>,
    pub saved_tickets: Vec<SavedTicket>,
    /// Tickets listed on the profile screen
    pub recent_tickets: Vec<SavedTicket>,
    pub active_ticket_count: usize,
    /// When the results feed was last scraped; `None` for built-in draws
    pub last_updated: Option<NaiveDateTime>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn draw(id: &str, date: &str, full: &str, number: &str, top3: &str, bottom3: &str, bottom2: &str) -> LotteryResult {
    LotteryResult {
        id: id.to_string(),
        date: date.to_string(),
        draw_date_full: full.to_string(),
        number: number.to_string(),
        top3: top3.to_string(),
        bottom3: bottom3.to_string(),
        bottom2: bottom2.to_string(),
    }
}

impl Fixtures {
    /// The built-in sample data set
    pub fn builtin() -> Self {
        let draws = vec![
            draw("1", "Oct 16", "16 Oct 2023", "123456", "789, 456", "123, 789", "45"),
            draw("2", "Oct 01", "01 Oct 2023", "987654", "355, 955", "815, 542", "12"),
            draw("3", "Sep 16", "16 Sep 2023", "741085", "125, 458", "624, 731", "91"),
            draw("4", "Sep 01", "01 Sep 2023", "523994", "943, 110", "259, 887", "84"),
        ];

        let history = vec![
            HistoryGroup::new(
                "October 2023",
                vec![
                    draw("h1", "Oct 16", "16 Oct 2023", "931446", "122, 350", "608, 210", "44"),
                    draw("h2", "Oct 01", "01 Oct 2023", "727202", "355, 955", "815, 542", "66"),
                ],
            ),
            HistoryGroup::new(
                "September 2023",
                vec![
                    draw("h3", "Sep 16", "16 Sep 2023", "320812", "038, 421", "057, 344", "46"),
                    draw("h4", "Sep 01", "01 Sep 2023", "915478", "521, 596", "692, 291", "91"),
                ],
            ),
        ];

        let saved_tickets = vec![
            SavedTicket {
                id: "s1".into(),
                number: "888888".into(),
                draw_date: date(2023, 10, 16),
                added_on: date(2023, 10, 1),
                status: TicketStatus::Won,
                prize_tier: Some("1st prize".into()),
                prize_amount: Some(6_000_000),
            },
            SavedTicket {
                id: "s2".into(),
                number: "123456".into(),
                draw_date: date(2023, 11, 1),
                added_on: date(2023, 10, 20),
                status: TicketStatus::Pending,
                prize_tier: None,
                prize_amount: None,
            },
            SavedTicket {
                id: "s3".into(),
                number: "456789".into(),
                draw_date: date(2023, 10, 16),
                added_on: date(2023, 10, 10),
                status: TicketStatus::Won,
                prize_tier: Some("Last 2 digits".into()),
                prize_amount: Some(2_000),
            },
            SavedTicket {
                id: "s4".into(),
                number: "456789".into(),
                draw_date: date(2023, 10, 1),
                added_on: date(2023, 9, 25),
                status: TicketStatus::Lost,
                prize_tier: None,
                prize_amount: None,
            },
        ];

        let recent_tickets = vec![
            SavedTicket {
                id: "r1".into(),
                number: "823491".into(),
                draw_date: date(2023, 10, 16),
                added_on: date(2023, 10, 2),
                status: TicketStatus::Won,
                prize_tier: None,
                prize_amount: None,
            },
            SavedTicket {
                id: "r2".into(),
                number: "004812".into(),
                draw_date: date(2023, 11, 1),
                added_on: date(2023, 10, 18),
                status: TicketStatus::Pending,
                prize_tier: None,
                prize_amount: None,
            },
        ];

        Self {
            draws,
            history,
            saved_tickets,
            recent_tickets,
            active_ticket_count: 12,
            last_updated: None,
        }
    }

    /// Replace the draw lists with the contents of a results feed
    pub fn with_feed(mut self, feed: ResultsFeed) -> Self {
        let draws = feed.draws();
        if draws.is_empty() {
            return self;
        }
        debug!(count = draws.len(), "using draws from results feed");
        self.history = vec![HistoryGroup::new("Published draws", draws.clone())];
        self.draws = draws;
        self.last_updated = feed.last_updated;
        self
    }

    /// Built-in data, overlaid with the configured results feed. An absent
    /// or unusable feed is logged and the built-in draws are kept.
    pub fn for_config(config: &AppConfig) -> Result<Self> {
        match config.load_feed() {
            Ok(Some(feed)) => Ok(Self::builtin().with_feed(feed)),
            Ok(None) => Ok(Self::builtin()),
            Err(e) if is_recoverable(&e) => {
                warn!(error = %e, "results feed unusable, using built-in draws");
                Ok(Self::builtin())
            }
            Err(e) => Err(e),
        }
    }

    /// Most recent draw, shown on the hero card and as the winning number
    pub fn latest(&self) -> Option<&LotteryResult> {
        self.draws.first()
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::builtin()
    }
}
