// src/services/normalize.rs
use chrono::NaiveDate;

use crate::error::{GiltError, Result};
use crate::models::{DateFormat, GiltRecord, RawRow, SecurityType, NOT_APPLICABLE};

/// Parse one export row into a typed record using the already resolved date layout.
pub fn normalize_row(row: &RawRow, format: DateFormat) -> Result<GiltRecord> {
    let security_type = SecurityType::from_category(&row.category).ok_or_else(|| {
        GiltError::data_format(format!(
            "unrecognised category '{}' for {}",
            row.category, row.isin
        ))
    })?;

    let export_date = parse_date(&row.export_date, format, "export date", &row.isin)?;
    let maturity = parse_date(&row.maturity, format, "maturity date", &row.isin)?;

    let coupon = parse_price(&row.coupon, "coupon", &row.isin)?.unwrap_or(0.0);
    let clean_price = parse_price(&row.clean_price, "clean price", &row.isin)?.unwrap_or(100.0);
    let dirty_price = parse_price(&row.dirty_price, "dirty price", &row.isin)?.unwrap_or(clean_price);

    Ok(GiltRecord {
        name: row.name.clone(),
        export_date,
        isin: row.isin.clone(),
        security_type,
        coupon,
        maturity,
        clean_price,
        dirty_price,
        days_to_maturity: (maturity - export_date).num_days(),
    })
}

fn parse_date(value: &str, format: DateFormat, field: &str, isin: &str) -> Result<NaiveDate> {
    format.parse(value).map_err(|e| {
        GiltError::data_format(format!(
            "{} '{}' for {} is not {}: {}",
            field, value, isin, format, e
        ))
    })
}

/// `None` for the N/A placeholder, letting the caller pick the default.
fn parse_price(value: &str, field: &str, isin: &str) -> Result<Option<f64>> {
    if value == NOT_APPLICABLE {
        return Ok(None);
    }
    value.parse::<f64>().map(Some).map_err(|_| {
        GiltError::data_format(format!("{} '{}' for {} is not a number", field, value, isin))
    })
}
