// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Entry;

/// Entries added during this process, most recent last. Never persisted.
#[derive(Debug, Default, Clone)]
pub struct UndoTracker {
    stack: Vec<Entry>,
}

impl UndoTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.stack.push(entry);
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
