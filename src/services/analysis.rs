// src/services/analysis.rs
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::HashMap;

use super::calculations::calculate_returns;
use super::date_format::detect_date_format;
use super::eligibility::{check_eligibility, SkipReason};
use super::normalize::normalize_row;
use super::ranking::rank_securities;
use crate::error::Result;
use crate::models::{DateFormat, RankedSecurity, RawRow, Security, TaxRate};

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub date_format: DateFormat,
    pub rows_read: usize,
    pub skipped: HashMap<SkipReason, usize>,
    pub ranked: Vec<RankedSecurity>,
}

impl Analysis {
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// First pass: settle the date layout for the whole export.
pub fn resolve_date_format(rows: &[RawRow]) -> Result<DateFormat> {
    detect_date_format(rows.iter().map(|row| row.maturity.as_str()))
}

/// Second pass: normalize, filter and price every row.
pub fn build_securities(
    rows: &[RawRow],
    format: DateFormat,
    tax_rate: TaxRate,
    today: NaiveDate,
) -> Result<(Vec<Security>, HashMap<SkipReason, usize>)> {
    let mut securities = Vec::new();
    let mut skipped: HashMap<SkipReason, usize> = HashMap::new();

    for row in rows {
        let record = normalize_row(row, format)?;

        if let Err(reason) = check_eligibility(&record, today) {
            if reason == SkipReason::InvalidTerms {
                warn!(
                    "Skipping {}: dirty price {} over {} day(s) cannot be annualized",
                    record.isin, record.dirty_price, record.days_to_maturity
                );
            } else {
                debug!("Skipping {} ({}): {}", record.isin, record.name, reason);
            }
            *skipped.entry(reason).or_default() += 1;
            continue;
        }

        let Some(returns) = calculate_returns(&record, tax_rate) else {
            *skipped.entry(SkipReason::Unsupported(record.security_type)).or_default() += 1;
            continue;
        };

        securities.push(Security {
            isin: record.isin,
            security_type: record.security_type,
            coupon: record.coupon,
            maturity: record.maturity,
            dirty: record.dirty_price,
            gross_aer: returns.annual_equivalent,
        });
    }

    Ok((securities, skipped))
}

/// Run the whole pipeline over an export already held in memory.
pub fn analyse(rows: &[RawRow], tax_rate: TaxRate, today: NaiveDate) -> Result<Analysis> {
    let date_format = resolve_date_format(rows)?;
    let (securities, skipped) = build_securities(rows, date_format, tax_rate, today)?;

    let analysis = Analysis {
        date_format,
        rows_read: rows.len(),
        ranked: rank_securities(securities, tax_rate),
        skipped,
    };
    info!(
        "Analysed {} of {} rows at {} tax ({} skipped)",
        analysis.ranked.len(),
        analysis.rows_read,
        tax_rate,
        analysis.skipped_total()
    );
    Ok(analysis)
}
