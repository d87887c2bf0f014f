// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::{crate_version, Command};
use std::io::{BufRead, Write};

pub fn build_cli() -> Command {
    Command::new("expense-tracker")
        .version(crate_version!())
        .about("Interactive expense ledger: add, undo, list, search and report")
}

pub const MENU: &str = "\n=== SMART EXPENSE TRACKER ===
1) Add expense
2) Undo last add
3) List expenses (month or date range)
4) Search by note
5) Report (total, per category, max category)
0) Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Undo,
    List,
    Search,
    Report,
    Exit,
}

impl MenuChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Undo),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::Report),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Prints `label` and reads one trimmed line; `None` at end of input.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `ask`, but end of input reads as a blank answer.
    pub fn ask_or_blank(&mut self, label: &str) -> Result<String> {
        Ok(self.ask(label)?.unwrap_or_default())
    }

    pub fn say(&mut self, msg: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{}", msg)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
