// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::{MenuChoice, Prompter, MENU};
use crate::commands::{expenses, reports};
use crate::engine::Engine;
use crate::error::LedgerError;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Runs the menu until `0` or end of input. Ledger failures are reported and
/// the menu is shown again; only terminal I/O errors are returned.
pub fn run<R: BufRead, W: Write>(engine: &mut Engine, input: R, out: W) -> Result<W> {
    let mut io = Prompter::new(input, out);
    loop {
        io.say(MENU)?;
        let Some(choice) = io.ask("Select: ")? else {
            break;
        };
        let outcome = match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => expenses::add(engine, &mut io),
            Some(MenuChoice::Undo) => expenses::undo(engine, &mut io),
            Some(MenuChoice::List) => expenses::list(engine, &mut io),
            Some(MenuChoice::Search) => expenses::search(engine, &mut io),
            Some(MenuChoice::Report) => reports::handle(engine, &mut io),
            Some(MenuChoice::Exit) => break,
            None => io.say("Invalid choice."),
        };
        if let Err(err) = outcome {
            match err.downcast_ref::<LedgerError>() {
                Some(ledger_err) => {
                    tracing::error!(
                        error = %ledger_err,
                        fatal = ledger_err.is_fatal(),
                        "operation failed"
                    );
                    io.say(format!("Error: {}", ledger_err))?;
                }
                None => return Err(err),
            }
        }
    }
    tracing::debug!(pending_undo = engine.undo_depth(), "menu closed");
    io.say("Bye!")?;
    Ok(io.into_output())
}
