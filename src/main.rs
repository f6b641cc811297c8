use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::io;
use std::path::PathBuf;

use gilt_aer::handlers::analyse::{handle_analyse, uk_today, AnalyseRequest, OutputFormat};
use gilt_aer::models::TaxRate;

/// Rank UK gilts by annualized return after income tax.
#[derive(Parser, Debug)]
#[command(name = "gilt_aer", version, about, long_about = None)]
struct Cli {
    /// Path to a .csv export from https://reports.tradeweb.com/closing-prices/gilts/
    /// (no on-site filtering required)
    path: PathBuf,

    /// Your income tax rate percentage (e.g. 0, 20, 40, 45, ...)
    #[arg(env = "GILT_TAX_RATE")]
    tax_rate: TaxRate,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Treat this date (YYYY-MM-DD) as today instead of the current UK date
    #[arg(long)]
    today: Option<chrono::NaiveDate>,

    /// Skip the disclaimer and progress messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let cli = Cli::parse();
    let request = AnalyseRequest {
        path: cli.path,
        tax_rate: cli.tax_rate,
        today: cli.today.unwrap_or_else(uk_today),
        format: cli.format,
        quiet: cli.quiet,
    };
    info!("Using tax rate {} and today {}", request.tax_rate, request.today);

    let stdout = io::stdout();
    handle_analyse(&mut stdout.lock(), &request)
}
