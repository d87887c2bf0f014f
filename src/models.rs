// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::fmt;

/// One expense record. Equality is structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: String, // YYYY-MM-DD
    pub category: String,
    pub amount: Decimal,
    pub note: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date, self.category, self.amount, self.note
        )
    }
}

/// Selection applied by list and report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criteria {
    #[default]
    All,
    /// Prefix match on the date, e.g. `2024-05`.
    Month(String),
    /// Inclusive bounds compared against the ISO date string.
    Range {
        start: Option<String>,
        end: Option<String>,
    },
}

impl Criteria {
    /// Builds criteria from raw prompt answers. A non-blank month wins and
    /// the range bounds are ignored; blank answers mean "no bound".
    pub fn from_inputs(month: &str, start: &str, end: &str) -> Self {
        let month = month.trim();
        if !month.is_empty() {
            return Criteria::Month(month.to_string());
        }
        let bound = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        match (bound(start), bound(end)) {
            (None, None) => Criteria::All,
            (start, end) => Criteria::Range { start, end },
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Criteria::All => true,
            Criteria::Month(m) => entry.date.starts_with(m.as_str()),
            Criteria::Range { start, end } => {
                start.as_deref().is_none_or(|s| entry.date.as_str() >= s)
                    && end.as_deref().is_none_or(|e| entry.date.as_str() <= e)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total: Decimal,
    /// Descending by summed amount; ties keep first-encounter order.
    pub by_category: Vec<(String, Decimal)>,
    pub max_category: String,
    pub max_amount: Decimal,
}
