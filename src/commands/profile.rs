// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;
use crate::utils::pretty_table;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) | None => show(conn)?,
        Some(("reset", sub)) => reset(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let state = store::load(conn)?;
    let rows = vec![
        vec!["Streak".into(), format!("{}d", state.stats.streak)],
        vec!["XP".into(), state.stats.xp.to_string()],
        vec!["Level".into(), state.stats.level.to_string()],
        vec!["Last active".into(), state.stats.last_active_date.clone()],
        vec!["Badges".into(), state.stats.badges.join(", ")],
        vec!["Data points".into(), state.transactions.len().to_string()],
    ];
    println!("{}", pretty_table(&["Stat", "Value"], rows));
    Ok(())
}

fn reset(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        println!("This erases all stored history. Re-run with --yes to confirm.");
        return Ok(());
    }
    store::reset(conn)?;
    println!("Cleared stored history; demo data will be reseeded on next run.");
    Ok(())
}
