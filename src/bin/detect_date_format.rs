// src/bin/detect_date_format.rs
use anyhow::Context;
use dotenv::dotenv;
use gilt_aer::services::analysis::resolve_date_format;
use gilt_aer::services::tradeweb::load_rows;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let path: PathBuf = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: detect_date_format <path to export.csv>")?;

    let rows = load_rows(&path)?;
    let format = resolve_date_format(&rows)?;
    println!("Rows:        {}", rows.len());
    println!("Date format: {} ({})", format, format.pattern());
    Ok(())
}
