// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expense_tracker::error::LedgerError;
use expense_tracker::models::Entry;
use expense_tracker::store::LedgerStore;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn entry(date: &str, category: &str, amount: Decimal, note: &str) -> Entry {
    Entry {
        date: date.into(),
        category: category.into(),
        amount,
        note: note.into(),
    }
}

#[test]
fn ensure_initialized_writes_header_only_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    let store = LedgerStore::open(&path);

    store.ensure_initialized().unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "date,category,amount,note\n"
    );
    assert!(store.load().unwrap().is_empty());

    store
        .save(&[entry("2024-01-05", "Food", Decimal::new(1250, 2), "lunch")])
        .unwrap();
    store.ensure_initialized().unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::open(dir.path().join("nope.csv"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn round_trip_keeps_order_quoting_and_scale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    let store = LedgerStore::open(&path);
    let entries = vec![
        entry("2024-02-01", "Food, drinks", Decimal::new(1250, 2), "said \"hi\""),
        entry("2024-01-01", "Other", Decimal::new(3, 0), ""),
        entry("2024-03-10", "Rent", Decimal::new(100000, 2), "line\nbreak"),
    ];
    store.save(&entries).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, entries);
    assert_eq!(loaded[0].amount.to_string(), "12.50");

    store.save(&loaded).unwrap();
    assert_eq!(store.load().unwrap(), entries);
}

#[test]
fn load_accepts_missing_note_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    std::fs::write(&path, "date,category,amount\n2024-04-01,Bus,2.5\n").unwrap();
    let loaded = LedgerStore::open(&path).load().unwrap();
    assert_eq!(loaded, vec![entry("2024-04-01", "Bus", Decimal::new(25, 1), "")]);
}

#[test]
fn categories_load_exactly_as_stored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    let store = LedgerStore::open(&path);
    let raw = "date,category,amount,note\n2024-01-01, Food ,5,x\n";
    std::fs::write(&path, raw).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].category, " Food ");
    store.save(&loaded).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), raw);
}

#[test]
fn empty_category_is_a_storage_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    std::fs::write(&path, "date,category,amount,note\n2024-01-01,,5,x\n").unwrap();
    let err = LedgerStore::open(&path).load().unwrap_err();
    assert!(matches!(err, LedgerError::StorageRead { .. }));
    assert!(err.to_string().contains("empty category"));
}

#[test]
fn corrupt_rows_are_storage_read_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    let store = LedgerStore::open(&path);

    std::fs::write(&path, "date,category,amount,note\n2024-13-01,Food,5,\n").unwrap();
    assert!(matches!(store.load(), Err(LedgerError::StorageRead { .. })));

    std::fs::write(&path, "date,category,amount,note\n2024-01-01,Food,-5,\n").unwrap();
    let err = store.load().unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("row 1"));

    std::fs::write(&path, "when,what\n2024-01-01,Food\n").unwrap();
    assert!(matches!(store.load(), Err(LedgerError::StorageRead { .. })));
}

#[test]
fn failed_save_leaves_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    let store = LedgerStore::open(&path);
    let original = vec![entry("2024-01-01", "Food", Decimal::ONE, "keep")];
    store.save(&original).unwrap();

    // A non-empty directory at the destination makes the final rename fail.
    let blocked = LedgerStore::open(dir.path().join("sub"));
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("x"), "occupied").unwrap();
    assert!(matches!(
        blocked.save(&original),
        Err(LedgerError::StorageWrite { .. })
    ));

    assert_eq!(store.load().unwrap(), original);
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .collect();
    assert_eq!(leftovers.len(), 1);
}
