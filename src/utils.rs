// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

const UA: &str = concat!(
    "wealthtrack/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/wealthtrack/wealthtrack)"
);

pub fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Accepts a full RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`, or a
/// bare `YYYY-MM-DD` (taken as midnight UTC).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid timestamp '{}', expected ISO-8601", s))?;
    Ok(midnight(date))
}

pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line; anything else is one line.
        let val = serde_json::to_value(v)?;
        match val.as_array() {
            Some(items) => {
                for item in items {
                    println!("{}", serde_json::to_string(item)?);
                }
            }
            None => println!("{}", serde_json::to_string(&val)?),
        }
        return Ok(true);
    }
    Ok(false)
}

/// Default reporting window: one month back through today, inclusive.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    (start, today)
}

/// Resolves `--from`/`--to` against the default window and enforces the
/// start <= end precondition before any engine call sees the range.
pub fn range_from_args(sub: &clap::ArgMatches) -> Result<(NaiveDate, NaiveDate)> {
    let today = Utc::now().date_naive();
    let (default_start, default_end) = default_range(today);
    let start = match sub.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => default_start,
    };
    let end = match sub.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => default_end,
    };
    if start > end {
        bail!("Start date {} is after end date {}", start, end);
    }
    Ok((start, end))
}
