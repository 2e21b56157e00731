// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::engine::category_registry;
use crate::parser;
use crate::store;
use crate::utils::{fmt_money, pretty_table};

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let text = sub.get_one::<String>("text").unwrap();
    let save = sub.get_flag("save");

    let mut state = store::load(conn)?;
    let categories = category_registry(&state.transactions);
    let today = Utc::now().date_naive();

    println!("Parsing entry...");
    let draft = parser::parse_text(text, today, &categories)
        .and_then(|d| d.into_transaction(today));
    let Some(tx) = draft else {
        println!("Could not extract an amount from that entry; nothing to record.");
        return Ok(());
    };

    let rows = vec![
        vec!["Type".into(), tx.kind.as_str().to_string()],
        vec!["Amount".into(), fmt_money(&tx.amount, &tx.currency)],
        vec!["Category".into(), tx.category.clone()],
        vec!["Merchant".into(), tx.merchant.clone()],
        vec!["Date".into(), tx.day().to_string()],
        vec!["Note".into(), tx.note.clone()],
    ];
    println!("{}", pretty_table(&["Draft field", "Value"], rows));

    if save {
        let id = tx.id.clone();
        state.upsert(tx);
        store::save(conn, &state)?;
        println!("Recorded draft as transaction {}", id);
    } else {
        println!("Draft discarded. Re-run with --save to record it.");
    }
    Ok(())
}
