// src/models.rs
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{GiltError, Result};

/// Placeholder the export uses for missing numeric fields.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SecurityType {
    #[serde(rename = "Bill")]
    Bill,
    #[serde(rename = "Conventional")]
    Conventional,
    #[serde(rename = "Index-Linked")]
    IndexLinked,
    #[serde(rename = "STRIPS")]
    Strip,
}

impl SecurityType {
    /// Maps the export's category column onto a type.
    pub fn from_category(label: &str) -> Option<Self> {
        match label {
            "Bills" => Some(SecurityType::Bill),
            "Conventional" => Some(SecurityType::Conventional),
            "Index-linked" => Some(SecurityType::IndexLinked),
            "Strips" => Some(SecurityType::Strip),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SecurityType::Bill => "Bill",
            SecurityType::Conventional => "Conventional",
            SecurityType::IndexLinked => "Index-Linked",
            // acronym, so all-caps
            SecurityType::Strip => "STRIPS",
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The two slash-separated date layouts an export can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    DayFirst,
    MonthFirst,
}

impl DateFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayFirst => "%d/%m/%Y",
            DateFormat::MonthFirst => "%m/%d/%Y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateFormat::DayFirst => "DD/MM/YYYY",
            DateFormat::MonthFirst => "MM/DD/YYYY",
        }
    }

    pub fn parse(self, value: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value, self.pattern())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One data row of the export, fields still textual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub name: String,
    pub export_date: String,
    pub isin: String,
    pub category: String,
    pub coupon: String,
    pub maturity: String,
    pub clean_price: String,
    pub dirty_price: String,
}

/// A row after field parsing and defaulting, before eligibility is decided.
#[derive(Debug, Clone, PartialEq)]
pub struct GiltRecord {
    pub name: String,
    pub export_date: NaiveDate,
    pub isin: String,
    pub security_type: SecurityType,
    pub coupon: f64,
    pub maturity: NaiveDate,
    pub clean_price: f64,
    pub dirty_price: f64,
    pub days_to_maturity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub isin: String,
    #[serde(rename = "type")]
    pub security_type: SecurityType,
    pub coupon: f64,
    pub maturity: NaiveDate,
    pub dirty: f64,
    /// Annualized equivalent rate after income tax, despite the name.
    pub gross_aer: f64,
}

/// A security in report order with its grossed-up comparison figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSecurity {
    #[serde(flatten)]
    pub security: Security,
    /// `None` when the tax rate is 100% and grossing up is undefined.
    pub comparison_aer: Option<f64>,
}

/// Income tax rate in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxRate(f64);

impl TaxRate {
    pub const ZERO: TaxRate = TaxRate(0.0);

    /// Accepts 0 or a percentage in (1, 100]. Anything in (0, 1] probably
    /// means someone entered 0.4 for 40%.
    pub fn new(percent: f64) -> Result<Self> {
        if !percent.is_finite() || (percent <= 1.0 && percent != 0.0) || percent > 100.0 {
            return Err(GiltError::configuration(format!(
                "tax rate should be your prevailing income tax rate in percent; {}% seems illogical",
                percent
            )));
        }
        Ok(TaxRate(percent))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl FromStr for TaxRate {
    type Err = GiltError;

    fn from_str(s: &str) -> Result<Self> {
        let percent = s
            .trim()
            .parse::<f64>()
            .map_err(|_| GiltError::configuration(format!("tax rate '{}' is not a number", s)))?;
        TaxRate::new(percent)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
