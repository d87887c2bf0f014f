// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::Prompter;
use crate::commands::expenses::ask_criteria;
use crate::engine::Engine;
use crate::error::LedgerError;
use crate::models::Report;
use crate::utils::{fmt_amount, pretty_table};
use anyhow::Result;
use std::io::{BufRead, Write};

pub fn handle<R: BufRead, W: Write>(engine: &mut Engine, io: &mut Prompter<R, W>) -> Result<()> {
    let criteria = ask_criteria(io)?;
    match engine.report(&criteria) {
        Ok(report) => io.say(render(&report)),
        Err(LedgerError::EmptySelection) => io.say("No data in this selection."),
        Err(e) => Err(e.into()),
    }
}

pub fn render(report: &Report) -> String {
    let rows: Vec<Vec<String>> = report
        .by_category
        .iter()
        .map(|(cat, amt)| vec![cat.clone(), fmt_amount(amt)])
        .collect();
    format!(
        "\n=== REPORT ===\nTotal spent: {}\n\nBy category:\n{}\n\nMax spend category: {} ({})",
        fmt_amount(&report.total),
        pretty_table(&["Category", "Spent"], rows),
        report.max_category,
        fmt_amount(&report.max_amount),
    )
}
