// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::engine::filter_range;
use crate::models::{AppState, DEFAULT_CURRENCY, Transaction, TxKind};
use crate::store;
use crate::utils::{
    fmt_money, maybe_print_json, parse_decimal, parse_timestamp, pretty_table, range_from_args,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn kind_from_arg(sub: &clap::ArgMatches) -> Option<TxKind> {
    sub.get_one::<String>("type").map(|s| {
        if s == "income" {
            TxKind::Income
        } else {
            TxKind::Expense
        }
    })
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() {
        bail!("Amount must be non-negative; use --type expense for outgoing entries");
    }
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if category.is_empty() {
        bail!("--category is required and must be non-empty");
    }
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_timestamp(s)?,
        None => Utc::now(),
    };

    let tx = Transaction {
        id: Uuid::new_v4().to_string(),
        amount,
        currency: sub
            .get_one::<String>("currency")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        category,
        merchant: sub.get_one::<String>("merchant").cloned().unwrap_or_default(),
        note: sub.get_one::<String>("note").cloned().unwrap_or_default(),
        date,
        kind: kind_from_arg(sub).unwrap_or(TxKind::Expense),
        is_fixed: sub.get_flag("fixed"),
    };

    let mut state = store::load(conn)?;
    state.upsert(tx.clone());
    store::save(conn, &state)?;
    println!(
        "Recorded {} {} '{}' on {} (id: {})",
        tx.kind.as_str(),
        fmt_money(&tx.amount, &tx.currency),
        tx.category,
        tx.day(),
        tx.id
    );
    Ok(())
}

/// Update is full-replace by id: the stored record is rebuilt from the
/// existing values overridden by whatever flags were supplied.
fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut state = store::load(conn)?;
    let Some(existing) = state.find(id).cloned() else {
        bail!("Transaction '{}' not found", id);
    };

    let mut replacement = existing;
    if let Some(raw) = sub.get_one::<String>("amount") {
        let amount = parse_decimal(raw)?;
        if amount.is_sign_negative() {
            bail!("Amount must be non-negative");
        }
        replacement.amount = amount;
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        if cat.trim().is_empty() {
            bail!("Category must be non-empty");
        }
        replacement.category = cat.trim().to_string();
    }
    if let Some(ccy) = sub.get_one::<String>("currency") {
        replacement.currency = ccy.clone();
    }
    if let Some(m) = sub.get_one::<String>("merchant") {
        replacement.merchant = m.clone();
    }
    if let Some(n) = sub.get_one::<String>("note") {
        replacement.note = n.clone();
    }
    if let Some(d) = sub.get_one::<String>("date") {
        replacement.date = parse_timestamp(d)?;
    }
    if let Some(kind) = kind_from_arg(sub) {
        replacement.kind = kind;
    }
    if sub.get_flag("fixed") {
        replacement.is_fixed = true;
    } else if sub.get_flag("variable") {
        replacement.is_fixed = false;
    }

    state.upsert(replacement);
    store::save(conn, &state)?;
    println!("Replaced transaction {}", id);
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut state = store::load(conn)?;
    if !state.remove(id) {
        bail!("Transaction '{}' not found", id);
    }
    store::save(conn, &state)?;
    println!("Deleted transaction {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let state = store::load(conn)?;
    let data = query_rows(&state, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.day().to_string(),
                    t.kind.as_str().to_string(),
                    fmt_money(&t.amount, &t.currency),
                    t.category.clone(),
                    t.merchant.clone(),
                    if t.is_fixed { "fixed" } else { "" }.to_string(),
                    t.note.clone(),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Amount", "Category", "Merchant", "Fixed", "Note", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

/// Range-filtered rows, most recent first, optionally capped by `--limit`.
pub fn query_rows(state: &AppState, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let (start, end) = range_from_args(sub)?;
    let mut data = filter_range(&state.transactions, start, end);
    data.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
