//! Integration tests for loading a results feed from disk

use lottogo::app::App;
use lottogo::config::{AppConfig, ResultsFeed};
use lottogo::models::Fixtures;
use lottogo::{error, LottoError};
use ratatui::{backend::TestBackend, Terminal};
use std::fs;
use tempfile::TempDir;

const FEED: &str = r#"{
    "latest": {"date": "1 November 2023", "number": "100000", "top3": "111, 222", "bottom3": "333, 444", "bottom2": "55"},
    "history": [
        {"date": "1 November 2023", "number": "100000", "top3": "111, 222", "bottom3": "333, 444", "bottom2": "55"},
        {"date": "16 October 2023", "number": "200000", "top3": "x", "bottom3": "666, 777", "bottom2": "88"},
        {"date": "1 October 2023", "number": "300000", "top3": "999, 000", "bottom3": "121, 212", "bottom2": "99"}
    ],
    "last_updated": "2023-11-01 16:05:12"
}"#;

#[test]
fn test_config_feed_replaces_builtin_draws() {
    let temp_dir = TempDir::new().unwrap();
    let feed_path = temp_dir.path().join("lotto_results.json");
    fs::write(&feed_path, FEED).unwrap();

    let config = AppConfig::new().with_results_file(feed_path);
    let feed = config.load_feed().unwrap().expect("feed configured");
    let fixtures = Fixtures::builtin().with_feed(feed);

    let numbers: Vec<_> = fixtures.draws.iter().map(|d| d.number.as_str()).collect();
    assert_eq!(numbers, vec!["100000", "300000"]);
    assert_eq!(fixtures.latest().map(|d| d.number.as_str()), Some("100000"));
    assert_eq!(fixtures.history.len(), 1);
    assert_eq!(fixtures.history[0].results.len(), 2);
    assert_eq!(fixtures.saved_tickets, Fixtures::builtin().saved_tickets);
}

#[test]
fn test_no_feed_configured() {
    assert_eq!(AppConfig::new().load_feed().unwrap(), None);
}

#[test]
fn test_missing_feed_file_is_recoverable() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::new().with_results_file(temp_dir.path().join("missing.json"));
    let err = config.load_feed().unwrap_err();
    assert!(matches!(err, LottoError::Feed(_)));
    assert!(error::is_recoverable(&err));
}

#[test]
fn test_feed_without_draws_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let feed_path = temp_dir.path().join("empty.json");
    fs::write(&feed_path, r#"{"history": [], "last_updated": null}"#).unwrap();
    assert!(matches!(ResultsFeed::load(&feed_path), Err(LottoError::Feed(_))));
}

#[test]
fn test_config_file_with_missing_feed_uses_builtin() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("lottogo.toml");
    let feed_path = temp_dir.path().join("gone.json");
    fs::write(
        &config_path,
        format!("results_file = {:?}\n", feed_path.to_string_lossy()),
    )
    .unwrap();

    let config = AppConfig::load_from(&config_path).unwrap();
    assert_eq!(config.results_file.as_deref(), Some(feed_path.as_path()));
    assert_eq!(Fixtures::for_config(&config).unwrap(), Fixtures::builtin());
}

#[test]
fn test_home_shows_feed_update_time() {
    let temp_dir = TempDir::new().unwrap();
    let feed_path = temp_dir.path().join("lotto_results.json");
    fs::write(&feed_path, FEED).unwrap();

    let config = AppConfig::new().with_results_file(feed_path);
    let fixtures = Fixtures::for_config(&config).unwrap();
    let mut app = App::new(config, fixtures);

    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let text: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Updated 2023-11-01 16:05"));
    assert!(text.contains("1 0 0 0 0 0"));
}
