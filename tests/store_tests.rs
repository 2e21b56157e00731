// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use wealthtrack::models::{AppState, Transaction, TxKind};
use wealthtrack::store;
use wealthtrack::utils::midnight;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE store(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn
}

fn tx(id: &str, amount: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::from(amount),
        currency: "RM".to_string(),
        category: "Food".to_string(),
        merchant: "Mamak".to_string(),
        note: String::new(),
        date: midnight(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        kind: TxKind::Expense,
        is_fixed: false,
    }
}

#[test]
fn save_then_load_round_trips() {
    let conn = setup();
    let mut state = AppState::default();
    state.upsert(tx("t1", 42));
    store::save(&conn, &state).unwrap();

    let loaded = store::load(&conn).unwrap();
    assert_eq!(loaded.transactions.len(), 1);
    assert_eq!(loaded.transactions[0].id, "t1");
    assert_eq!(loaded.transactions[0].amount, Decimal::from(42));
    assert_eq!(loaded.transactions[0].day().to_string(), "2024-01-15");
}

#[test]
fn missing_key_seeds_demo_data_once() {
    let conn = setup();
    let first = store::load(&conn).unwrap();
    assert!(!first.transactions.is_empty());

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM store WHERE key=?1",
            params![store::STATE_KEY],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);

    let second = store::load(&conn).unwrap();
    assert_eq!(first.transactions.len(), second.transactions.len());
}

#[test]
fn upsert_replaces_by_id() {
    let mut state = AppState::default();
    state.upsert(tx("a", 10));
    state.upsert(tx("b", 20));
    let mut replacement = tx("a", 99);
    replacement.category = "Transport".to_string();
    state.upsert(replacement);

    assert_eq!(state.transactions.len(), 2);
    let a = state.find("a").unwrap();
    assert_eq!(a.amount, Decimal::from(99));
    assert_eq!(a.category, "Transport");
}

#[test]
fn new_entries_are_prepended() {
    let mut state = AppState::default();
    state.upsert(tx("old", 1));
    state.upsert(tx("new", 2));
    assert_eq!(state.transactions[0].id, "new");
}

#[test]
fn remove_is_terminal_and_reports_misses() {
    let mut state = AppState::default();
    state.upsert(tx("a", 10));
    assert!(state.remove("a"));
    assert!(!state.remove("a"));
    assert!(state.transactions.is_empty());
}

#[test]
fn reset_drops_the_versioned_key() {
    let conn = setup();
    store::save(&conn, &AppState::default()).unwrap();
    store::reset(&conn).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM store", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn blob_uses_camel_case_field_names() {
    let conn = setup();
    let mut state = AppState::default();
    state.upsert(tx("t1", 5));
    store::save(&conn, &state).unwrap();

    let blob: String = conn
        .query_row(
            "SELECT value FROM store WHERE key=?1",
            params![store::STATE_KEY],
            |r| r.get(0),
        )
        .unwrap();
    assert!(blob.contains("\"isFixed\""));
    assert!(blob.contains("\"type\":\"expense\""));
}

#[test]
fn date_only_timestamps_in_old_blobs_still_load() {
    let conn = setup();
    let blob = r#"{
        "transactions": [{
            "id": "legacy",
            "amount": "25",
            "currency": "RM",
            "category": "Food & Drink",
            "date": "2024-01-15",
            "type": "expense"
        }],
        "stats": {"streak": 1, "xp": 10, "level": 1}
    }"#;
    conn.execute(
        "INSERT INTO store(key, value) VALUES(?1, ?2)",
        params![store::STATE_KEY, blob],
    )
    .unwrap();

    let state = store::load(&conn).unwrap();
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.transactions[0].day().to_string(), "2024-01-15");
    assert!(!state.transactions[0].is_fixed);
    assert!(state.transactions[0].merchant.is_empty());
}
