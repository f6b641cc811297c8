// src/services/date_format.rs
use log::{debug, info};

use crate::error::{GiltError, Result};
use crate::models::DateFormat;

/// Decide whether maturity dates are DD/MM/YYYY or MM/DD/YYYY.
///
/// Exports have been seen in both layouts. Any date with a day above 12
/// settles the question, and bills mature often enough that one turns up
/// early. The first unambiguous date wins and nothing after it is read.
pub fn detect_date_format<'a, I>(maturities: I) -> Result<DateFormat>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut inspected = 0usize;
    for maturity in maturities {
        inspected += 1;
        if DateFormat::DayFirst.parse(maturity).is_err() {
            info!("Found {} after {} maturity date(s)", DateFormat::MonthFirst, inspected);
            return Ok(DateFormat::MonthFirst);
        }
        if DateFormat::MonthFirst.parse(maturity).is_err() {
            info!("Found {} after {} maturity date(s)", DateFormat::DayFirst, inspected);
            return Ok(DateFormat::DayFirst);
        }
        debug!("Maturity date '{}' fits both layouts", maturity);
    }

    Err(GiltError::data_format(format!(
        "could not tell whether dates are DD/MM/YYYY or MM/DD/YYYY from {} maturity date(s); \
         is this a full export?",
        inspected
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};

    #[test]
    fn day_above_twelve_in_first_field_means_day_first() {
        let dates = ["05/04/2027", "22/03/2073", "03/22/2073"];
        assert_eq!(detect_date_format(dates).unwrap(), DateFormat::DayFirst);
    }

    #[test]
    fn day_above_twelve_in_second_field_means_month_first() {
        let dates = ["01/02/2027", "03/22/2073"];
        assert_eq!(detect_date_format(dates).unwrap(), DateFormat::MonthFirst);
    }

    #[test]
    fn resolution_stops_at_first_unambiguous_date() {
        let mut seen = Vec::new();
        let dates = ["07/07/2027", "13/01/2027", "01/13/2027", "not a date"];
        let format = detect_date_format(dates.iter().map(|d| {
            seen.push(*d);
            *d
        }))
        .unwrap();
        assert_eq!(format, DateFormat::DayFirst);
        assert_eq!(seen, vec!["07/07/2027", "13/01/2027"]);
    }

    #[test]
    fn all_ambiguous_dates_are_a_data_format_error() {
        let dates = ["01/02/2027", "12/12/2030", "06/07/2028"];
        assert!(matches!(
            detect_date_format(dates),
            Err(GiltError::DataFormat(_))
        ));
    }

    #[test]
    fn empty_input_is_a_data_format_error() {
        assert!(matches!(
            detect_date_format(Vec::<&str>::new()),
            Err(GiltError::DataFormat(_))
        ));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn unambiguous_date_after_ambiguous_prefix_resolves_correctly(
            prefix in proptest::collection::vec((1u32..=12, 1u32..=12, 2027i32..2070), 0..8),
            day in 13u32..=28,
            month in 1u32..=12,
            year in 2027i32..2070,
            day_first in proptest::bool::ANY,
        ) {
            let mut dates: Vec<String> = prefix
                .iter()
                .map(|(a, b, y)| format!("{:02}/{:02}/{}", a, b, y))
                .collect();
            let decisive = if day_first {
                format!("{:02}/{:02}/{}", day, month, year)
            } else {
                format!("{:02}/{:02}/{}", month, day, year)
            };
            dates.push(decisive);
            let expected = if day_first { DateFormat::DayFirst } else { DateFormat::MonthFirst };
            let detected = detect_date_format(dates.iter().map(String::as_str));
            prop_assert_eq!(detected, Ok(expected));
        }
    }
}
