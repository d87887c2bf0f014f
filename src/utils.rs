// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const DEFAULT_CATEGORY: &str = "Other";

pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    // chrono accepts unpadded fields; the stored form must stay fixed width
    // so lexicographic range comparisons hold.
    let date = NaiveDate::parse_from_str(s, DATE_FMT)
        .map_err(|_| LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))?;
    if date.format(DATE_FMT).to_string() != s {
        return Err(LedgerError::Validation(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            s
        )));
    }
    Ok(date)
}

pub fn validate_date(s: &str) -> bool {
    parse_date(s).is_ok()
}

pub fn normalize_category(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    let s = s.trim();
    let amount = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| LedgerError::Validation(format!("Invalid number '{}'", s)))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::Validation(format!(
            "Amount must be positive, got {}",
            amount
        )));
    }
    Ok(amount)
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format(DATE_FMT).to_string()
}

pub fn fmt_amount(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_must_be_real_and_zero_padded() {
        assert!(validate_date("2024-02-29"));
        assert!(!validate_date("2023-02-29"));
        assert!(!validate_date("2024-13-01"));
        assert!(!validate_date("2024-1-05"));
        assert!(!validate_date("05/01/2024"));
        assert!(!validate_date(""));
    }

    #[test]
    fn category_defaults_to_other() {
        assert_eq!(normalize_category("  Food "), "Food");
        assert_eq!(normalize_category("   "), "Other");
        assert_eq!(normalize_category(""), "Other");
    }

    #[test]
    fn amount_must_be_positive_number() {
        assert_eq!(parse_amount("12.50").unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_amount(" 7 ").unwrap(), Decimal::new(7, 0));
        assert_eq!(parse_amount("1e3").unwrap(), Decimal::new(1000, 0));
        assert!(matches!(parse_amount("0"), Err(LedgerError::Validation(_))));
        assert!(matches!(parse_amount("-3.10"), Err(LedgerError::Validation(_))));
        assert!(matches!(parse_amount("abc"), Err(LedgerError::Validation(_))));
        assert!(matches!(parse_amount(""), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn today_is_a_valid_date() {
        assert!(validate_date(&today()));
    }

    #[test]
    fn amounts_render_with_two_places() {
        assert_eq!(fmt_amount(&Decimal::new(1975, 2)), "19.75");
        assert_eq!(fmt_amount(&Decimal::new(5, 0)), "5.00");
    }
}
