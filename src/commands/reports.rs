// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::engine::{aggregate, category_registry, days_in_range, filter_range, group_by_day};
use crate::models::{DEFAULT_CURRENCY, TxKind};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, range_from_args};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("timeline", sub)) => timeline(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let state = store::load(conn)?;
    let (start, end) = range_from_args(sub)?;
    let filtered = filter_range(&state.transactions, start, end);
    let s = aggregate(&filtered, days_in_range(start, end));

    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }

    println!("Period {} .. {}", start, end);
    let rows = vec![
        vec!["Income".into(), fmt_money(&s.income, DEFAULT_CURRENCY)],
        vec!["Expenses".into(), fmt_money(&s.expense_total, DEFAULT_CURRENCY)],
        vec!["Net".into(), fmt_money(&s.net, DEFAULT_CURRENCY)],
        vec!["Avg daily spend".into(), fmt_money(&s.avg_daily, DEFAULT_CURRENCY)],
        vec!["Saving rate".into(), format!("{}%", s.saving_rate)],
        vec!["Fixed expenses".into(), fmt_money(&s.fixed_total, DEFAULT_CURRENCY)],
        vec!["Variable expenses".into(), fmt_money(&s.variable_total, DEFAULT_CURRENCY)],
        vec!["Health".into(), s.health.as_str().to_string()],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    if !s.top_categories.is_empty() {
        let cat_rows: Vec<Vec<String>> = s
            .top_categories
            .iter()
            .map(|c| vec![c.category.clone(), fmt_money(&c.total, DEFAULT_CURRENCY)])
            .collect();
        println!("{}", pretty_table(&["Top category", "Spent"], cat_rows));
    }
    Ok(())
}

fn timeline(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let state = store::load(conn)?;
    let (start, end) = range_from_args(sub)?;

    let mut filtered = filter_range(&state.transactions, start, end);
    // Canonical presentation order: most recent first by full timestamp.
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    let groups = group_by_day(&filtered);

    if maybe_print_json(json_flag, jsonl_flag, &groups)? {
        return Ok(());
    }

    if groups.is_empty() {
        println!("No entries found for {} .. {}", start, end);
        return Ok(());
    }
    for group in &groups {
        println!(
            "{} · {} entries · net {}",
            group.date,
            group.transactions.len(),
            fmt_money(&group.net(), DEFAULT_CURRENCY)
        );
        let rows: Vec<Vec<String>> = group
            .transactions
            .iter()
            .map(|t| {
                let signed = match t.kind {
                    TxKind::Income => format!("+{}", fmt_money(&t.amount, &t.currency)),
                    TxKind::Expense => format!("-{}", fmt_money(&t.amount, &t.currency)),
                };
                vec![signed, t.category.clone(), t.merchant.clone(), t.note.clone()]
            })
            .collect();
        println!("{}", pretty_table(&["Amount", "Category", "Merchant", "Note"], rows));
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let state = store::load(conn)?;
    let registry = category_registry(&state.transactions);
    if !maybe_print_json(json_flag, jsonl_flag, &registry)? {
        let rows: Vec<Vec<String>> = registry.into_iter().map(|c| vec![c]).collect();
        println!("{}", pretty_table(&["Category"], rows));
    }
    Ok(())
}
