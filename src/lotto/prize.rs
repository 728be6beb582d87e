//! Prize breakdown shown on the win screen

use crate::util::format::format_baht;

/// First prize of the government lottery, in baht
pub const FIRST_PRIZE_BAHT: u64 = 6_000_000;
/// Withholding tax on lottery winnings, in percent
pub const WITHHOLDING_TAX_PERCENT: u64 = 1;

/// Gross prize, tax and net payout in whole baht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeBreakdown {
    pub gross: u64,
    pub tax: u64,
    pub net: u64,
}

impl PrizeBreakdown {
    pub fn new(gross: u64) -> Self {
        let tax = gross * WITHHOLDING_TAX_PERCENT / 100;
        Self {
            gross,
            tax,
            net: gross - tax,
        }
    }

    pub fn first_prize() -> Self {
        Self::new(FIRST_PRIZE_BAHT)
    }

    /// Lines for the win screen: gross, tax (negative) and net
    pub fn display_lines(&self) -> [(&'static str, String); 3] {
        [
            ("First prize", format_baht(self.gross)),
            ("Tax (1%)", format!("-{}", format_baht(self.tax))),
            ("Net", format_baht(self.net)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_prize_breakdown() {
        let prize = PrizeBreakdown::first_prize();
        assert_eq!(prize.tax, 60_000);
        assert_eq!(prize.net, 5_940_000);
    }

    #[test]
    fn test_small_amounts_round_down() {
        let prize = PrizeBreakdown::new(2_050);
        assert_eq!(prize.tax, 20);
        assert_eq!(prize.net, 2_030);
    }

    #[test]
    fn test_display_lines() {
        let lines = PrizeBreakdown::first_prize().display_lines();
        assert_eq!(lines[0].1, "฿6,000,000");
        assert_eq!(lines[1].1, "-฿60,000");
        assert_eq!(lines[2].1, "฿5,940,000");
    }
}
