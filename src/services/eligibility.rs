// src/services/eligibility.rs
use chrono::NaiveDate;
use std::fmt;

use crate::models::{GiltRecord, SecurityType};

/// Why a record was left out of the analysis. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Matures today or matured between the export date and today.
    Matured,
    /// EuroGov and other non-UK bonds share the export.
    ForeignMarket,
    /// Strips and index-linked gilts are not modelled.
    Unsupported(SecurityType),
    /// Non-positive price or term; dividing by either is meaningless.
    InvalidTerms,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::Matured => write!(f, "matured"),
            SkipReason::ForeignMarket => write!(f, "not a UK gilt"),
            SkipReason::Unsupported(kind) => write!(f, "{} not modelled", kind),
            SkipReason::InvalidTerms => write!(f, "non-positive price or term"),
        }
    }
}

const DOMESTIC_PREFIX: &str = "uk";

pub fn check_eligibility(record: &GiltRecord, today: NaiveDate) -> Result<(), SkipReason> {
    if record.maturity <= today {
        return Err(SkipReason::Matured);
    }

    if !record.name.to_lowercase().starts_with(DOMESTIC_PREFIX) {
        return Err(SkipReason::ForeignMarket);
    }

    match record.security_type {
        // Strips are deeply discounted securities with their own tax rules, and
        // index-linked returns depend on future inflation.
        SecurityType::Strip | SecurityType::IndexLinked => {
            return Err(SkipReason::Unsupported(record.security_type))
        }
        SecurityType::Bill | SecurityType::Conventional => {}
    }

    if record.days_to_maturity <= 0 || record.dirty_price <= 0.0 {
        return Err(SkipReason::InvalidTerms);
    }

    Ok(())
}
