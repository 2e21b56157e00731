// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let state = store::load(conn)?;
    let mut txs = state.transactions;
    txs.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id", "date", "type", "amount", "currency", "category", "merchant", "note",
                "isFixed",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_rfc3339(),
                    t.kind.as_str().to_string(),
                    t.amount.to_string(),
                    t.currency.clone(),
                    t.category.clone(),
                    t.merchant.clone(),
                    t.note.clone(),
                    t.is_fixed.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
