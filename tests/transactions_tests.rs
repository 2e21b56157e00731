// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use wealthtrack::models::{AppState, Transaction, TxKind};
use wealthtrack::utils::parse_timestamp;
use wealthtrack::{cli, commands::transactions};

fn tx(id: &str, timestamp: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::from(10),
        currency: "RM".to_string(),
        category: "Food".to_string(),
        merchant: String::new(),
        note: String::new(),
        date: parse_timestamp(timestamp).unwrap(),
        kind: TxKind::Expense,
        is_fixed: false,
    }
}

fn setup() -> AppState {
    let mut state = AppState::default();
    state.upsert(tx("t1", "2025-01-01"));
    state.upsert(tx("t2", "2025-01-02"));
    state.upsert(tx("t3", "2025-01-03T08:30:00"));
    state.upsert(tx("t4", "2025-01-03T17:00:00"));
    state
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["wealthtrack", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let state = setup();
    let sub = list_matches(&["--from", "2025-01-01", "--to", "2025-01-31", "--limit", "2"]);
    let rows = transactions::query_rows(&state, &sub).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "t4");
    assert_eq!(rows[1].id, "t3");
}

#[test]
fn list_orders_by_full_timestamp_descending() {
    let state = setup();
    let sub = list_matches(&["--from", "2025-01-01", "--to", "2025-01-31"]);
    let rows = transactions::query_rows(&state, &sub).unwrap();
    let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t4", "t3", "t2", "t1"]);
}

#[test]
fn list_filters_to_the_requested_range() {
    let state = setup();
    let sub = list_matches(&["--from", "2025-01-02", "--to", "2025-01-02"]);
    let rows = transactions::query_rows(&state, &sub).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "t2");
}

#[test]
fn list_rejects_inverted_ranges() {
    let state = setup();
    let sub = list_matches(&["--from", "2025-01-31", "--to", "2025-01-01"]);
    assert!(transactions::query_rows(&state, &sub).is_err());
}

#[test]
fn edit_is_full_replace_by_id() {
    let mut state = setup();
    let mut replacement = tx("t2", "2025-01-02");
    replacement.amount = Decimal::from(999);
    replacement.category = "Transport".to_string();
    replacement.is_fixed = true;
    state.upsert(replacement);

    assert_eq!(state.transactions.len(), 4);
    let t2 = state.find("t2").unwrap();
    assert_eq!(t2.amount, Decimal::from(999));
    assert_eq!(t2.category, "Transport");
    assert!(t2.is_fixed);
}
