// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use wealthtrack::models::{AppState, Transaction, TxKind};
use wealthtrack::utils::midnight;
use wealthtrack::{cli, commands::exporter, store};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE store(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    let mut state = AppState::default();
    state.upsert(Transaction {
        id: "t1".to_string(),
        amount: Decimal::from(100),
        currency: "RM".to_string(),
        category: "Food".to_string(),
        merchant: "Mamak".to_string(),
        note: "dinner".to_string(),
        date: midnight(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        kind: TxKind::Expense,
        is_fixed: false,
    });
    state.upsert(Transaction {
        id: "t2".to_string(),
        amount: Decimal::from(6500),
        currency: "RM".to_string(),
        category: "Salary".to_string(),
        merchant: "Tech Global Corp".to_string(),
        note: String::new(),
        date: midnight(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        kind: TxKind::Income,
        is_fixed: true,
    });
    store::save(&conn, &state).unwrap();
    conn
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["wealthtrack", "export", "transactions"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    sub.clone()
}

#[test]
fn csv_export_writes_header_and_rows_in_date_order() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let sub = export_matches(&["--format", "csv", "--out", path.to_str().unwrap()]);

    exporter::handle(&conn, &sub).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "id,date,type,amount,currency,category,merchant,note,isFixed"
    );
    // Oldest first: salary (2024-01-01) precedes the dinner (2024-02-01).
    assert!(lines[1].starts_with("t2,"));
    assert!(lines[2].starts_with("t1,"));
    assert!(lines[1].contains("income"));
    assert!(lines[1].contains("true"));
}

#[test]
fn json_export_round_trips_through_serde() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let sub = export_matches(&["--format", "json", "--out", path.to_str().unwrap()]);

    exporter::handle(&conn, &sub).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Transaction> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].id, "t2");
    assert_eq!(parsed[1].category, "Food");
}
