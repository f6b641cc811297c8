// src/handlers/analyse.rs
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use chrono_tz::Europe::London;
use clap::ValueEnum;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use super::report::{render_json, render_table, DISCLAIMER};
use crate::models::{RawRow, TaxRate};
use crate::services::analysis::{analyse, Analysis};
use crate::services::tradeweb::load_rows;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON document
    Json,
}

#[derive(Debug, Clone)]
pub struct AnalyseRequest {
    pub path: PathBuf,
    pub tax_rate: TaxRate,
    pub today: NaiveDate,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Today's date in the UK, where gilts settle.
pub fn uk_today() -> NaiveDate {
    Utc::now().with_timezone(&London).date_naive()
}

pub fn handle_analyse<W: Write>(out: &mut W, request: &AnalyseRequest) -> anyhow::Result<()> {
    info!("Handling analysis of {}", request.path.display());
    let rows = load_rows(&request.path)?;
    write_report(out, &rows, request)
}

/// Analyse rows already in memory and write the report.
pub fn write_report<W: Write>(out: &mut W, rows: &[RawRow], request: &AnalyseRequest) -> anyhow::Result<()> {
    let prose = request.format == OutputFormat::Table && !request.quiet;
    if prose {
        writeln!(out, "{}", DISCLAIMER)?;
        writeln!(out)?;
        write!(out, "Identifying whether file is DD/MM/YYYY or MM/DD/YYYY... ")?;
    }

    let analysis: Analysis = analyse(rows, request.tax_rate, request.today)
        .with_context(|| format!("Could not analyse {}", request.path.display()))?;

    match request.format {
        OutputFormat::Table => {
            if prose {
                writeln!(out, "Found {}.", analysis.date_format)?;
                writeln!(out)?;
            }
            write!(out, "{}", render_table(&analysis.ranked))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(&analysis, request.tax_rate)?)?;
        }
    }
    Ok(())
}
