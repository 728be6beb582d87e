use lottogo::{
    app::{tui, App, Tui},
    config::AppConfig,
    error::user_friendly_message,
    logging,
    models::Fixtures,
    Result,
};
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::load()?;

    // Logging is optional; the app runs without it
    match logging::init(&config) {
        Ok(Some(path)) => info!(path = %path.display(), "logging to file"),
        Ok(None) => {}
        Err(e) => eprintln!("{}", user_friendly_message(&e)),
    }

    let fixtures = Fixtures::for_config(&config)?;

    let mut app = App::new(config, fixtures);
    let mut terminal = Tui::new()?;
    terminal.init()?;

    let run_result = app.run(&mut terminal);
    tui::finish(run_result, terminal.restore())
}
