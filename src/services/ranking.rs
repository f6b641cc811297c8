// src/services/ranking.rs
use crate::models::{RankedSecurity, Security, TaxRate};

/// The pre-tax rate a taxpayer would need elsewhere to match `aer`.
///
/// Losses pass through unchanged. `None` at a 100% tax rate.
pub fn comparison_aer(aer: f64, tax_rate: TaxRate) -> Option<f64> {
    if aer < 0.0 {
        return Some(aer);
    }
    let retained = 1.0 - tax_rate.fraction();
    if retained <= 0.0 {
        return None;
    }
    Some(aer / retained)
}

/// Best AER first. Ties keep their input order.
pub fn rank_securities(mut securities: Vec<Security>, tax_rate: TaxRate) -> Vec<RankedSecurity> {
    securities.sort_by(|a, b| b.gross_aer.total_cmp(&a.gross_aer));
    securities
        .into_iter()
        .map(|security| RankedSecurity {
            comparison_aer: comparison_aer(security.gross_aer, tax_rate),
            security,
        })
        .collect()
}
