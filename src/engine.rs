// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Criteria, Entry, Report};
use crate::store::LedgerStore;
use crate::undo::UndoTracker;
use crate::utils::{normalize_category, parse_amount, parse_date, today};
use rust_decimal::Decimal;

/// Ledger operations for one process. Each call loads a fresh snapshot from
/// the store; mutating calls save before returning.
#[derive(Debug)]
pub struct Engine {
    store: LedgerStore,
    undo: UndoTracker,
}

impl Engine {
    pub fn new(store: LedgerStore) -> Self {
        Self {
            store,
            undo: UndoTracker::new(),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Validates raw field input and appends the entry. A blank date means
    /// today; a blank category means "Other".
    pub fn add(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        note: &str,
    ) -> LedgerResult<Entry> {
        let date = match date.trim() {
            "" => today(),
            d => {
                parse_date(d)?;
                d.to_string()
            }
        };
        let entry = Entry {
            date,
            category: normalize_category(category),
            amount: parse_amount(amount)?,
            note: note.trim().to_string(),
        };

        let mut ledger = self.store.load()?;
        ledger.push(entry.clone());
        self.store.save(&ledger)?;
        self.undo.push(entry.clone());
        tracing::info!(
            date = %entry.date,
            category = %entry.category,
            amount = %entry.amount,
            undo_depth = self.undo.len(),
            "entry added"
        );
        Ok(entry)
    }

    /// Reverses the most recent add. The snapshot is consumed even when no
    /// matching entry remains in the ledger.
    pub fn undo(&mut self) -> LedgerResult<Entry> {
        let last = self.undo.pop().ok_or(LedgerError::UndoUnavailable)?;
        let mut ledger = self.store.load()?;
        if !remove_first_match(&mut ledger, &last) {
            tracing::warn!(entry = %last, "undo target no longer in ledger");
            return Err(LedgerError::UndoMismatch(last));
        }
        self.store.save(&ledger)?;
        tracing::info!(
            entry = %last,
            undo_depth = self.undo.len(),
            "entry removed by undo"
        );
        Ok(last)
    }

    pub fn filter(&self, criteria: &Criteria) -> LedgerResult<Vec<Entry>> {
        Ok(filter_entries(self.store.load()?, criteria))
    }

    pub fn search(&self, keyword: &str) -> LedgerResult<Vec<Entry>> {
        Ok(search_entries(self.store.load()?, keyword))
    }

    pub fn report(&self, criteria: &Criteria) -> LedgerResult<Report> {
        let selected = filter_entries(self.store.load()?, criteria);
        build_report(&selected)?.ok_or(LedgerError::EmptySelection)
    }
}

/// Removes exactly one entry equal to `target`, the earliest one.
pub fn remove_first_match(ledger: &mut Vec<Entry>, target: &Entry) -> bool {
    match ledger.iter().position(|e| e == target) {
        Some(idx) => {
            ledger.remove(idx);
            true
        }
        None => false,
    }
}

pub fn filter_entries(ledger: Vec<Entry>, criteria: &Criteria) -> Vec<Entry> {
    ledger.into_iter().filter(|e| criteria.matches(e)).collect()
}

/// Case-insensitive substring match on the note. An empty keyword matches
/// every entry.
pub fn search_entries(ledger: Vec<Entry>, keyword: &str) -> Vec<Entry> {
    let needle = keyword.to_lowercase();
    ledger
        .into_iter()
        .filter(|e| e.note.to_lowercase().contains(&needle))
        .collect()
}

/// `Ok(None)` when `entries` is empty; sums that leave the `Decimal` range
/// are an error.
pub fn build_report(entries: &[Entry]) -> LedgerResult<Option<Report>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let overflow = |what: &str| LedgerError::AmountOverflow(what.to_string());
    let mut by_category: Vec<(String, Decimal)> = Vec::new();
    let mut total = Decimal::ZERO;
    for e in entries {
        total = total
            .checked_add(e.amount)
            .ok_or_else(|| overflow("the selection"))?;
        match by_category.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, sum)) => {
                *sum = sum
                    .checked_add(e.amount)
                    .ok_or_else(|| overflow(&e.category))?;
            }
            None => by_category.push((e.category.clone(), e.amount)),
        }
    }
    // stable: equal sums keep first-encounter order
    by_category.sort_by(|a, b| b.1.cmp(&a.1));
    let (max_category, max_amount) = by_category[0].clone();
    Ok(Some(Report {
        total,
        by_category,
        max_category,
        max_amount,
    }))
}
