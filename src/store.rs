// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Entry;
use crate::utils::{parse_amount, parse_date};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tempfile::NamedTempFile;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "ExpenseTracker", "expense-tracker"));

const HEADER: [&str; 4] = ["date", "category", "amount", "note"];

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("expenses.csv"))
}

/// On-disk row; every field is text so that load can report exactly which
/// value broke the entry invariant.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    date: String,
    category: String,
    amount: String,
    #[serde(default)]
    note: String,
}

impl From<&Entry> for Row {
    fn from(e: &Entry) -> Self {
        Row {
            date: e.date.clone(),
            category: e.category.clone(),
            amount: e.amount.to_string(),
            note: e.note.clone(),
        }
    }
}

impl Row {
    fn into_entry(self) -> LedgerResult<Entry> {
        parse_date(&self.date)?;
        let amount = parse_amount(&self.amount)?;
        if self.category.trim().is_empty() {
            return Err(LedgerError::Validation("empty category".to_string()));
        }
        Ok(Entry {
            date: self.date,
            category: self.category,
            amount,
            note: self.note,
        })
    }
}

/// CSV file holding the full ledger. Every save replaces the whole file.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_err(&self, reason: impl ToString) -> LedgerError {
        LedgerError::StorageRead {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_err(&self, reason: impl ToString) -> LedgerError {
        LedgerError::StorageWrite {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    /// Creates an empty store with the header row if none exists.
    pub fn ensure_initialized(&self) -> LedgerResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "creating empty ledger");
        self.save(&[])
    }

    pub fn load(&self) -> LedgerResult<Vec<Entry>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no ledger file, starting empty");
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| self.read_err(e))?;

        let headers = rdr.headers().map_err(|e| self.read_err(e))?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        for col in ["date", "category", "amount"] {
            if !headers.iter().any(|h| h == col) {
                return Err(self.read_err(format!("missing column '{}'", col)));
            }
        }

        let mut entries = Vec::new();
        for (i, result) in rdr.deserialize::<Row>().enumerate() {
            let row = result.map_err(|e| self.read_err(e))?;
            let entry = row
                .into_entry()
                .map_err(|e| self.read_err(format!("row {}: {}", i + 1, e)))?;
            entries.push(entry);
        }
        tracing::debug!(path = %self.path.display(), rows = entries.len(), "ledger loaded");
        Ok(entries)
    }

    /// Writes to a temp file beside the store and renames it into place, so
    /// the previous contents survive any failure before the rename.
    pub fn save(&self, entries: &[Entry]) -> LedgerResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.write_err(e))?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_err(e))?;
        {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            wtr.write_record(HEADER).map_err(|e| self.write_err(e))?;
            for entry in entries {
                wtr.serialize(Row::from(entry))
                    .map_err(|e| self.write_err(e))?;
            }
            wtr.flush().map_err(|e| self.write_err(e))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.write_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_err(e.error))?;
        tracing::debug!(path = %self.path.display(), rows = entries.len(), "ledger saved");
        Ok(())
    }
}
