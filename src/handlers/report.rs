// src/handlers/report.rs
use serde::Serialize;
use std::fmt::Write;

use crate::models::{RankedSecurity, TaxRate};
use crate::services::analysis::Analysis;

pub const DISCLAIMER: &str = "\
IMPORTANT: This tool is not tax advice nor financial advice.  It probably contains errors.
Do your own evaluation of how taxation works for your specific circumstances before buying any securities.
Do not rely on this tool to be kept up to date as taxation laws change.";

fn percent(value: f64) -> String {
    format!("{:.3}%", value * 100.0)
}

/// Fixed-width table, best AER first.
pub fn render_table(ranked: &[RankedSecurity]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "| {:12} | {:12} | {:7} | {:10} | {:^7} | {:^17} |",
        "", "", "", "", "", "Comparison AER"
    );
    let _ = writeln!(
        out,
        "| {:^12} | {:^12} | {:>7} | {:^10} | {:^7} | {:^7} | {:^7} |",
        "ISIN", "Type", "Coupon", "Maturity", "Price", "Net", "Gross"
    );
    for row in ranked {
        let security = &row.security;
        let comparison = row.comparison_aer.map(percent).unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out,
            "| {:12} | {:^12} | {:6.3}% | {:10} | {:7.3} | {:>7} | {:>7} |",
            security.isin,
            security.security_type.display_name(),
            security.coupon,
            security.maturity.to_string(),
            security.dirty,
            percent(security.gross_aer),
            comparison
        );
    }
    out
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    date_format: &'static str,
    tax_rate: f64,
    rows_read: usize,
    rows_skipped: usize,
    securities: &'a [RankedSecurity],
}

pub fn render_json(analysis: &Analysis, tax_rate: TaxRate) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        date_format: analysis.date_format.label(),
        tax_rate: tax_rate.percent(),
        rows_read: analysis.rows_read,
        rows_skipped: analysis.skipped_total(),
        securities: &analysis.ranked,
    })
}
