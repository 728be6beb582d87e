//! Draw result data models

/// Prize tag shown next to every first-prize number
pub const FIRST_PRIZE_TAG: &str = "1st prize";

/// One published draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotteryResult {
    pub id: String,
    /// Short label, e.g. `Oct 16`
    pub date: String,
    /// Long label, e.g. `16 Oct 2023`
    pub draw_date_full: String,
    /// First prize number (six digits)
    pub number: String,
    /// Front three digit prizes, already joined for display
    pub top3: String,
    /// Back three digit prizes, already joined for display
    pub bottom3: String,
    /// Back two digit prize
    pub bottom2: String,
}

impl LotteryResult {
    /// One-line summary used in lists
    pub fn summary(&self) -> String {
        format!(
            "{:<8} {}  2D {}  F3 {}  B3 {}",
            self.date, self.number, self.bottom2, self.top3, self.bottom3
        )
    }
}

/// Draws published in one month, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryGroup {
    pub month: String,
    pub results: Vec<LotteryResult>,
}

impl HistoryGroup {
    pub fn new(month: impl Into<String>, results: Vec<LotteryResult>) -> Self {
        Self {
            month: month.into(),
            results,
        }
    }
}
