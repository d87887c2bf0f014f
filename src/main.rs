// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use expense_tracker::{cli, commands, engine::Engine, store};

fn main() -> Result<()> {
    let _matches = cli::build_cli().get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = store::store_path()?;
    let ledger = store::LedgerStore::open(&path);
    ledger
        .ensure_initialized()
        .with_context(|| format!("Initialize ledger at {}", path.display()))?;

    tracing::info!(path = %path.display(), "using ledger");

    let mut engine = Engine::new(ledger);
    let stdin = std::io::stdin();
    commands::menu::run(&mut engine, stdin.lock(), std::io::stdout())?;
    Ok(())
}
