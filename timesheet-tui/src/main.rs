mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod runtime;
mod summary;
mod time_utils;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let today = time_utils::local_today();

    match cli.command {
        Some(Commands::ConfigPath) => {
            let path = config::TimesheetConfig::ensure_default_file()?;
            println!("{}", path.display());
            Ok(())
        }
        Some(Commands::Summary { date, json }) => {
            let cfg = config::TimesheetConfig::load()?;
            summary::run_summary(&cfg, today, date.unwrap_or(today), json)
        }
        Some(Commands::Run { date }) => run(today, date.unwrap_or(today)).await,
        None => run(today, today).await,
    }
}

async fn run(today: time::Date, anchor: time::Date) -> Result<()> {
    let cfg = config::TimesheetConfig::load()?;
    logging::init(&cfg.log_path()?)?;
    let mut app = bootstrap::initialize_app(&cfg, today, anchor)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
