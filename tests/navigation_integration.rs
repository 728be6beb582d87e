//! Integration tests for navigation driven by key presses

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lottogo::app::{App, NavTab, Screen, ViewState};
use lottogo::config::AppConfig;
use lottogo::lotto::{GeneratorMode, Outcome};
use lottogo::models::{Fixtures, TicketFilter};

fn app() -> App {
    App::new(AppConfig::default(), Fixtures::builtin())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_ticket(app: &mut App, number: &str) {
    for c in number.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn open_checker(app: &mut App) {
    // First home shortcut is "Check my ticket"
    press(app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::Check);
}

#[test]
fn test_winning_ticket_flow() {
    let mut app = app();
    open_checker(&mut app);

    type_ticket(&mut app, "58293");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::Check, "incomplete ticket cannot be checked");

    type_ticket(&mut app, "6");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::ResultWin);
    assert_eq!(app.current_screen(), Screen::Result(Outcome::Win));
    assert!(!app.shows_bottom_nav());
    assert_eq!(app.active_tab(), NavTab::Home);
}

#[test]
fn test_losing_ticket_then_try_again() {
    let mut app = app();
    open_checker(&mut app);
    type_ticket(&mut app, "582935");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::ResultLoss);

    // "Try again" is selected first
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::Check);
    assert!(app.keypad().is_empty());
}

#[test]
fn test_jackpot_number_wins() {
    let mut app = app();
    open_checker(&mut app);
    type_ticket(&mut app, "123456");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::ResultWin);
}

#[test]
fn test_result_back_home_button_returns_to_checker() {
    let mut app = app();
    open_checker(&mut app);
    type_ticket(&mut app, "000001");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::ResultLoss);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::Check);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view(), ViewState::Home);
}

#[test]
fn test_keypad_caps_at_six_digits() {
    let mut app = app();
    open_checker(&mut app);
    type_ticket(&mut app, "12345678");
    assert_eq!(app.keypad().as_str(), "123456");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.keypad().as_str(), "12345");
}

#[test]
fn test_tabs_cycle_through_roots() {
    let mut app = app();
    let mut visited = Vec::new();
    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
        visited.push(app.view());
    }
    assert_eq!(
        visited,
        vec![
            ViewState::History,
            ViewState::Generator,
            ViewState::Profile,
            ViewState::Home
        ]
    );
}

#[test]
fn test_profile_opens_saved_tickets_and_back() {
    let mut app = app();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.view(), ViewState::Profile);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::SavedTickets);
    assert!(!app.shows_bottom_nav());
    assert_eq!(app.active_tab(), NavTab::Home);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.saved_tickets().filter(), TicketFilter::Pending);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view(), ViewState::Profile);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.saved_tickets().filter(), TicketFilter::All, "filter resets on entry");
}

#[test]
fn test_generator_resets_on_reentry() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view(), ViewState::Generator);

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.generator().mode(), GeneratorMode::Birthday);
    assert_eq!(app.generator().generated(), Some([8, 2, 9, 5, 1, 7]));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view(), ViewState::Generator, "generator has no back target");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.generator().mode(), GeneratorMode::Phone);
    assert_eq!(app.generator().generated(), None);
}

#[test]
fn test_history_back_returns_home() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), ViewState::History);
    assert_eq!(app.active_tab(), NavTab::History);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view(), ViewState::Home);
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Char('Q')] {
        let mut app = app();
        open_checker(&mut app);
        press(&mut app, code);
        assert!(app.should_quit());
    }

    let mut app = app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_start_at_result_view_hides_bottom_nav() {
    let config = AppConfig::default().with_start_view(ViewState::ResultWin);
    let app = App::new(config, Fixtures::builtin());
    assert_eq!(app.view(), ViewState::ResultWin);
    assert!(!app.shows_bottom_nav());
}
