// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Entry;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0}")]
    Validation(String),

    #[error("Nothing to undo.")]
    UndoUnavailable,

    #[error("Could not find record to undo: {0}")]
    UndoMismatch(Entry),

    #[error("No data in this selection.")]
    EmptySelection,

    #[error("Total for {0} exceeds the largest representable amount")]
    AmountOverflow(String),

    #[error("Failed to read ledger at {}: {reason}", path.display())]
    StorageRead { path: PathBuf, reason: String },

    #[error("Failed to write ledger at {}: {reason}", path.display())]
    StorageWrite { path: PathBuf, reason: String },
}

impl LedgerError {
    /// Storage failures abort the current operation; everything else is a
    /// plain message for the user.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LedgerError::StorageRead { .. } | LedgerError::StorageWrite { .. }
        )
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
