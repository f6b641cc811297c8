// src/services/calculations.rs
use serde::Serialize;

use crate::models::{GiltRecord, SecurityType, TaxRate};

const DAYS_PER_YEAR: f64 = 365.0;

/// Returns per 100 nominal held to maturity, plus the annualized figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnBreakdown {
    pub total_gross_return: f64,
    /// The part of `total_gross_return` that is liable to income tax.
    pub taxable_return: f64,
    pub total_net_return: f64,
    pub percentage_return: f64,
    pub annual_equivalent: f64,
}

fn annual_equivalent(percentage_return: f64, days_to_maturity: i64) -> f64 {
    (1.0 + percentage_return).powf(DAYS_PER_YEAR / days_to_maturity as f64) - 1.0
}

/// Hold-to-maturity returns after income tax.
///
/// The record must already have passed eligibility: positive dirty price and
/// term. Returns `None` for strips and index-linked gilts, which are not
/// modelled.
pub fn calculate_returns(record: &GiltRecord, tax_rate: TaxRate) -> Option<ReturnBreakdown> {
    let (total_gross_return, taxable_return) = match record.security_type {
        SecurityType::Bill => {
            // No coupon. Bills are deeply discounted securities, so the whole
            // uplift to par is charged to income tax.
            let uplift = 100.0 - record.dirty_price;
            (uplift, uplift)
        }
        SecurityType::Conventional => {
            // Coupons are taxed as income; the capital gain is exempt. The
            // dirty price already accounts for accrued interest.
            let coupons = record.coupon * (record.days_to_maturity as f64 / DAYS_PER_YEAR);
            ((100.0 - record.dirty_price) + coupons, coupons)
        }
        SecurityType::IndexLinked | SecurityType::Strip => return None,
    };

    let total_net_return = total_gross_return - taxable_return * tax_rate.fraction();
    let percentage_return = total_net_return / record.dirty_price;

    Some(ReturnBreakdown {
        total_gross_return,
        taxable_return,
        total_net_return,
        percentage_return,
        annual_equivalent: annual_equivalent(percentage_return, record.days_to_maturity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn record(security_type: SecurityType, coupon: f64, dirty: f64, days: i64) -> GiltRecord {
        let export_date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        GiltRecord {
            name: "UK Test".to_string(),
            export_date,
            isin: "GB00TEST0001".to_string(),
            security_type,
            coupon,
            maturity: export_date + chrono::Duration::days(days),
            clean_price: dirty,
            dirty_price: dirty,
            days_to_maturity: days,
        }
    }

    #[test]
    fn bill_uplift_is_fully_taxable() {
        let r = calculate_returns(&record(SecurityType::Bill, 0.0, 98.0, 91), TaxRate::ZERO).unwrap();
        assert_close(r.total_gross_return, 2.0, 1e-12);
        assert_close(r.taxable_return, 2.0, 1e-12);
        assert_close(r.total_net_return, 2.0, 1e-12);
        assert_close(r.annual_equivalent, (1.0 + 2.0 / 98.0_f64).powf(365.0 / 91.0) - 1.0, 1e-12);
        assert_close(r.annual_equivalent, 0.0844, 5e-4);
    }

    #[test]
    fn bill_tax_reduces_net_return() {
        let rate = TaxRate::new(40.0).unwrap();
        let r = calculate_returns(&record(SecurityType::Bill, 0.0, 98.0, 91), rate).unwrap();
        assert_close(r.total_net_return, 1.2, 1e-12);
        assert_close(r.percentage_return, 1.2 / 98.0, 1e-12);
    }

    #[test]
    fn conventional_taxes_coupons_only() {
        let rate = TaxRate::new(20.0).unwrap();
        let r = calculate_returns(&record(SecurityType::Conventional, 4.0, 102.0, 365), rate).unwrap();
        assert_close(r.taxable_return, 4.0, 1e-12);
        assert_close(r.total_gross_return, 2.0, 1e-12);
        assert_close(r.total_net_return, 1.2, 1e-12);
        assert_close(r.annual_equivalent, 1.2 / 102.0, 1e-12);
    }

    #[test]
    fn conventional_coupons_are_pro_rated_without_compounding() {
        let r = calculate_returns(&record(SecurityType::Conventional, 2.0, 100.0, 730), TaxRate::ZERO)
            .unwrap();
        assert_close(r.taxable_return, 4.0, 1e-12);
        assert_close(r.annual_equivalent, 1.04_f64.sqrt() - 1.0, 1e-12);
    }

    #[test]
    fn premium_price_can_give_negative_return() {
        let rate = TaxRate::new(45.0).unwrap();
        let r = calculate_returns(&record(SecurityType::Conventional, 0.25, 101.0, 180), rate).unwrap();
        assert!(r.total_net_return < 0.0);
        assert!(r.annual_equivalent < 0.0);
    }

    #[test]
    fn unmodelled_types_have_no_returns() {
        for kind in [SecurityType::Strip, SecurityType::IndexLinked] {
            assert_eq!(calculate_returns(&record(kind, 1.0, 90.0, 400), TaxRate::ZERO), None);
        }
    }
}
