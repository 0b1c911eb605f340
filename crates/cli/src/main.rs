use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use console_adapter::ConsoleReporter;
use cookie_core::ports::{CookieReporter, LogSource};
use cookie_core::utils::parse_target_date;
use cookie_core::MostActiveCookieService;
use csv_adapter::CsvLogSource;
use log::error;
use std::path::PathBuf;

/// Find the most active cookie in a log file given a date
#[derive(Parser, Debug)]
#[command(name = "most-active-cookie")]
#[command(about = "Find the most active cookie in a cookie log file given a date")]
struct Cli {
    /// Cookie log file in CSV format, sorted newest first
    log_file: PathBuf,

    /// Date (YYYY-MM-DD) to find the most active cookie for
    #[arg(short = 'd', long = "date", required = true, value_parser = parse_date_arg)]
    date: NaiveDate,

    /// Directory the log file name is resolved against
    #[arg(long = "logs-dir")]
    logs_dir: Option<PathBuf>,
}

impl Cli {
    fn log_path(&self) -> PathBuf {
        match &self.logs_dir {
            Some(dir) => dir.join(&self.log_file),
            None => self.log_file.clone(),
        }
    }
}

fn parse_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_target_date(value).map_err(|e| e.to_string())
}

fn run(cli: &Cli) -> Result<()> {
    let log_path = cli.log_path();

    // Instantiate concrete implementations of secondary adapters
    let log_source: Box<dyn LogSource> = Box::new(
        CsvLogSource::open_checked(&log_path)
            .with_context(|| format!("cannot use log file {}", log_path.display()))?,
    );
    let reporter: Box<dyn CookieReporter> = Box::new(ConsoleReporter::stdout());

    let service = MostActiveCookieService::new(log_source, reporter);

    service
        .execute(cli.date)
        .with_context(|| format!("failed to scan {} for {}", log_path.display(), cli.date))?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(&cli) {
        error!("An error occurred: {:#}", e);
        std::process::exit(1);
    }
}
