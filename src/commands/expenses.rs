// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::Prompter;
use crate::engine::Engine;
use crate::error::LedgerError;
use crate::models::{Criteria, Entry};
use crate::utils::{fmt_amount, pretty_table};
use anyhow::Result;
use std::io::{BufRead, Write};

pub fn add<R: BufRead, W: Write>(engine: &mut Engine, io: &mut Prompter<R, W>) -> Result<()> {
    let date = io.ask_or_blank("Date (YYYY-MM-DD, blank=today): ")?;
    let category = io.ask_or_blank("Category: ")?;
    let amount = io.ask_or_blank("Amount: ")?;
    let note = io.ask_or_blank("Note (optional): ")?;

    match engine.add(&date, &category, &amount, &note) {
        Ok(entry) => io.say(format!("Added: {}", entry)),
        Err(LedgerError::Validation(reason)) => io.say(reason),
        Err(e) => Err(e.into()),
    }
}

pub fn undo<R: BufRead, W: Write>(engine: &mut Engine, io: &mut Prompter<R, W>) -> Result<()> {
    match engine.undo() {
        Ok(entry) => io.say(format!("Undo successful: {}", entry)),
        Err(LedgerError::UndoUnavailable) => io.say("Nothing to undo."),
        Err(LedgerError::UndoMismatch(_)) => io.say("Could not find record to undo."),
        Err(e) => Err(e.into()),
    }
}

/// Month first; when blank, an optional start and end date.
pub fn ask_criteria<R: BufRead, W: Write>(io: &mut Prompter<R, W>) -> Result<Criteria> {
    let month = io.ask_or_blank("Month YYYY-MM (blank to skip): ")?;
    if !month.is_empty() {
        return Ok(Criteria::from_inputs(&month, "", ""));
    }
    let start = io.ask_or_blank("Start date YYYY-MM-DD (blank to skip): ")?;
    let end = io.ask_or_blank("End date YYYY-MM-DD (blank to skip): ")?;
    Ok(Criteria::from_inputs("", &start, &end))
}

pub fn list<R: BufRead, W: Write>(engine: &mut Engine, io: &mut Prompter<R, W>) -> Result<()> {
    let criteria = ask_criteria(io)?;
    let rows = engine.filter(&criteria)?;
    if rows.is_empty() {
        return io.say("No records found.");
    }
    io.say(entries_table(&rows))
}

pub fn search<R: BufRead, W: Write>(engine: &mut Engine, io: &mut Prompter<R, W>) -> Result<()> {
    let keyword = io.ask_or_blank("Keyword in note: ")?;
    let rows = engine.search(&keyword)?;
    if rows.is_empty() {
        return io.say("No matches found.");
    }
    io.say(entries_table(&rows))
}

pub fn entries_table(entries: &[Entry]) -> comfy_table::Table {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.date.clone(),
                e.category.clone(),
                fmt_amount(&e.amount),
                e.note.clone(),
            ]
        })
        .collect();
    pretty_table(&["Date", "Category", "Amount", "Note"], rows)
}
