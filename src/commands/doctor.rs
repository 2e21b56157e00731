// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::store;
use crate::utils::pretty_table;

/// Checks the stored blob against the data-model invariants: unique ids,
/// non-negative amounts, non-empty categories.
pub fn handle(conn: &Connection) -> Result<()> {
    let state = store::load(conn)?;
    let mut rows = Vec::new();

    let mut seen = HashSet::new();
    for t in &state.transactions {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
        if t.amount < Decimal::ZERO {
            rows.push(vec![
                "negative_amount".into(),
                format!("{} ({})", t.id, t.amount),
            ]);
        }
        if t.category.is_empty() {
            rows.push(vec!["empty_category".into(), t.id.clone()]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
