use clap::{Parser, Subcommand};
use time::Date;

#[derive(Debug, Parser)]
#[command(name = "timesheet-tui")]
#[command(about = "Terminal week sheet for logging hours against cases")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the week sheet (default)
    Run {
        /// Show the week containing this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Print daily totals for a week
    Summary {
        /// Summarize the week containing this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        /// Print the week submission payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

fn parse_date(s: &str) -> Result<Date, String> {
    timesheet::parse_iso(s).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
