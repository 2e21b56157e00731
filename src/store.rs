// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::PathBuf;

use crate::models::AppState;
use crate::seed;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("io.wealthtrack", "Wealthtrack", "wealthtrack"));

/// Versioned key the whole state blob lives under. Bump on breaking
/// changes to the blob layout.
pub const STATE_KEY: &str = "wealthtrack/v1";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("wealthtrack.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open store at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS store(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

/// Loads the full state. A missing key means a first run: demo data is
/// generated, persisted, and returned.
pub fn load(conn: &Connection) -> Result<AppState> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM store WHERE key=?1",
            params![STATE_KEY],
            |r| r.get(0),
        )
        .optional()?;
    match raw {
        Some(blob) => serde_json::from_str(&blob)
            .with_context(|| format!("Corrupt state blob under key '{}'", STATE_KEY)),
        None => {
            let state = seed::demo_state(Utc::now().date_naive());
            save(conn, &state)?;
            Ok(state)
        }
    }
}

/// Serializes the full state as one JSON blob under the versioned key.
pub fn save(conn: &Connection, state: &AppState) -> Result<()> {
    let blob = serde_json::to_string(state)?;
    conn.execute(
        "INSERT INTO store(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![STATE_KEY, blob],
    )?;
    Ok(())
}

/// Drops the persisted key entirely; the next load reseeds demo data.
pub fn reset(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM store WHERE key=?1", params![STATE_KEY])?;
    Ok(())
}
