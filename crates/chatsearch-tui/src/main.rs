//! chatsearch-tui - Terminal chat sidebar with message search
//!
//! A chat sidebar whose search bar autocompletes users, channels, dates and
//! search modifiers, with results and the matching channel side by side.

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use std::io::{self, stdout};

mod action;
mod app;
mod cli;
mod components;
mod error;
mod event;
mod layout;
mod logging;
mod store;

use app::App;
use chatsearch_core::storage::config::Config;
use cli::Cli;
use error::TuiResult;
use store::MessageStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> TuiResult<()> {
    let config = Config::load(cli.config_path())?;
    logging::init_logging(&cli, &config)?;

    let store = match cli.data_file.as_ref().or(config.data_file.as_ref()) {
        Some(path) => MessageStore::load(path)?,
        None => MessageStore::sample(),
    };
    let side_bar_right = cli.right_sidebar || config.side_bar_right;
    log::info!(
        "starting with {} messages, sidebar on the {}",
        store.len(),
        if side_bar_right { "right" } else { "left" }
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Set panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Create and run app
    let mut app = App::new(&config, store, side_bar_right);
    let result = app.run_async(&mut terminal).await;

    // Cleanup terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        log::error!("application error: {}", err);
    }
    result
}

/// Restore terminal to normal state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
