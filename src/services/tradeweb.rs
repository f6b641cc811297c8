// src/services/tradeweb.rs
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{GiltError, Result};
use crate::models::RawRow;

/// Columns a closing-prices export must carry, in order.
pub const EXPORT_COLUMNS: usize = 8;

/// Read every data row of a gilts closing-prices export
/// (https://reports.tradeweb.com/closing-prices/gilts/).
///
/// The header row is discarded. Trailing extra columns are ignored.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| GiltError::data_format(format!("unreadable CSV: {}", e)))?;
        rows.push(row_from_record(&record)?);
    }

    info!("Read {} data rows from export", rows.len());
    Ok(rows)
}

/// Open and read an export file.
pub fn load_rows(path: &Path) -> anyhow::Result<Vec<RawRow>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let rows = read_rows(file).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(rows)
}

fn row_from_record(record: &StringRecord) -> Result<RawRow> {
    if record.len() < EXPORT_COLUMNS {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        return Err(GiltError::data_format(format!(
            "line {} has {} fields, expected {}",
            line,
            record.len(),
            EXPORT_COLUMNS
        )));
    }
    let field = |i: usize| record.get(i).unwrap_or_default().to_string();
    Ok(RawRow {
        name: field(0),
        export_date: field(1),
        isin: field(2),
        category: field(3),
        coupon: field(4),
        maturity: field(5),
        clean_price: field(6),
        dirty_price: field(7),
    })
}
