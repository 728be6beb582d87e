//! Results feed reader
//!
//! Reads the JSON file published by the results scraper (`latest`, `history`,
//! `last_updated`). The file is only ever read; incomplete or placeholder
//! draws are dropped.

use crate::models::LotteryResult;
use crate::{LottoError, Result, MAX_RESULTS_HISTORY};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Timestamp format of `last_updated`
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Values the scraper writes when a prize has not been announced yet
const PLACEHOLDERS: &[&str] = &["n/a", "nan", "null", "x", "xx", "xxx"];

/// One draw as written by the scraper
#[derive(Debug, Clone, Default, Deserialize)]
struct DrawRecord {
    #[serde(default)]
    date: String,
    #[serde(default)]
    number: String,
    #[serde(default)]
    top3: String,
    #[serde(default)]
    bottom3: String,
    #[serde(default)]
    bottom2: String,
}

/// Feed file structure
#[derive(Debug, Deserialize)]
struct FeedFile {
    #[serde(default)]
    latest: Option<DrawRecord>,
    #[serde(default)]
    history: Vec<DrawRecord>,
    #[serde(default)]
    last_updated: Option<String>,
}

impl DrawRecord {
    fn is_valid(&self) -> bool {
        [&self.date, &self.number, &self.top3, &self.bottom3, &self.bottom2]
            .iter()
            .all(|field| {
                let value = field.trim().to_lowercase();
                !value.is_empty() && !PLACEHOLDERS.contains(&value.as_str())
            })
    }

    fn into_result(self, id: String) -> LotteryResult {
        let date = self.date.trim().to_string();
        LotteryResult {
            id,
            draw_date_full: date.clone(),
            date,
            number: self.number.trim().to_string(),
            top3: self.top3.trim().to_string(),
            bottom3: self.bottom3.trim().to_string(),
            bottom2: self.bottom2.trim().to_string(),
        }
    }
}

/// Validated contents of a results feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsFeed {
    pub latest: Option<LotteryResult>,
    /// Newest first, at most `MAX_RESULTS_HISTORY` entries
    pub history: Vec<LotteryResult>,
    pub last_updated: Option<NaiveDateTime>,
}

impl ResultsFeed {
    /// Load and validate a feed file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LottoError::Feed(format!("Failed to read results file {}: {}", path.display(), e))
        })?;
        let feed = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            draws = feed.history.len(),
            "loaded results feed"
        );
        Ok(feed)
    }

    /// Parse and validate feed JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let file: FeedFile = serde_json::from_str(content)?;

        let latest = match file.latest {
            Some(record) if record.is_valid() => {
                Some(record.into_result("feed-latest".to_string()))
            }
            Some(record) => {
                warn!(date = %record.date, "latest draw is incomplete, skipping");
                None
            }
            None => None,
        };

        let mut history = Vec::new();
        for (i, record) in file.history.into_iter().enumerate() {
            if history.len() == MAX_RESULTS_HISTORY {
                break;
            }
            if record.is_valid() {
                history.push(record.into_result(format!("feed-{}", i)));
            } else {
                warn!(index = i, date = %record.date, "history draw is incomplete, skipping");
            }
        }

        if latest.is_none() && history.is_empty() {
            return Err(LottoError::Feed("no valid draws in results file".to_string()));
        }

        let last_updated = file.last_updated.as_deref().and_then(|raw| {
            NaiveDateTime::parse_from_str(raw, LAST_UPDATED_FORMAT)
                .map_err(|e| warn!(value = raw, error = %e, "unreadable last_updated"))
                .ok()
        });

        Ok(Self {
            latest,
            history,
            last_updated,
        })
    }

    /// Draws for display: latest first, then history without the latest draw
    pub fn draws(&self) -> Vec<LotteryResult> {
        let mut draws: Vec<LotteryResult> = self.latest.iter().cloned().collect();
        let latest_date = self.latest.as_ref().map(|l| l.date.as_str());
        draws.extend(
            self.history
                .iter()
                .filter(|d| Some(d.date.as_str()) != latest_date)
                .cloned(),
        );
        draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "latest": {"date": "16 Oct 2023", "number": "123456", "top3": "789, 456", "bottom3": "123, 789", "bottom2": "45"},
        "history": [
            {"date": "16 Oct 2023", "number": "123456", "top3": "789, 456", "bottom3": "123, 789", "bottom2": "45"},
            {"date": "01 Oct 2023", "number": "987654", "top3": "355, 955", "bottom3": "815, 542", "bottom2": "N/A"},
            {"date": "16 Sep 2023", "number": "741085", "top3": "125, 458", "bottom3": "624, 731", "bottom2": "91"}
        ],
        "last_updated": "2023-10-16 16:30:00"
    }"#;

    #[test]
    fn test_placeholders_are_dropped() {
        let feed = ResultsFeed::from_json(FEED).unwrap();
        assert_eq!(feed.latest.as_ref().unwrap().number, "123456");
        let numbers: Vec<_> = feed.history.iter().map(|d| d.number.as_str()).collect();
        assert_eq!(numbers, vec!["123456", "741085"]);
    }

    #[test]
    fn test_last_updated_parsed() {
        let feed = ResultsFeed::from_json(FEED).unwrap();
        let ts = feed.last_updated.unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2023-10-16 16:30");
    }

    #[test]
    fn test_draws_skip_duplicate_latest() {
        let feed = ResultsFeed::from_json(FEED).unwrap();
        let draws = feed.draws();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].id, "feed-latest");
        assert_eq!(draws[1].number, "741085");
    }

    #[test]
    fn test_feed_without_valid_draws_is_an_error() {
        let json = r#"{"latest": {"date": "x", "number": "", "top3": "", "bottom3": "", "bottom2": ""}, "history": []}"#;
        assert!(matches!(ResultsFeed::from_json(json), Err(LottoError::Feed(_))));
    }

    #[test]
    fn test_history_only_feed() {
        let json = r#"{"history": [{"date": "01 Sep 2023", "number": "523994", "top3": "943, 110", "bottom3": "259, 887", "bottom2": "84"}]}"#;
        let feed = ResultsFeed::from_json(json).unwrap();
        assert!(feed.latest.is_none());
        assert!(feed.last_updated.is_none());
        assert_eq!(feed.draws().len(), 1);
    }

    #[test]
    fn test_history_is_capped() {
        let entry = r#"{"date": "d", "number": "111111", "top3": "1", "bottom3": "2", "bottom2": "3"}"#;
        let entries = vec![entry; MAX_RESULTS_HISTORY + 5].join(",");
        let json = format!(r#"{{"history": [{}]}}"#, entries);
        let feed = ResultsFeed::from_json(&json).unwrap();
        assert_eq!(feed.history.len(), MAX_RESULTS_HISTORY);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(ResultsFeed::from_json("{not json"), Err(LottoError::Feed(_))));
    }
}
