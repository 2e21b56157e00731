// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display-only currency label used when an entry does not carry one.
pub const DEFAULT_CURRENCY: &str = "RM";

/// Sign carrier for a transaction; `amount` itself is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Expense => "expense",
            TxKind::Income => "income",
        }
    }
}

/// The sole persisted entity. Field names stay camelCase on the wire so
/// blobs written by earlier builds of the app keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    #[serde(default)]
    pub merchant: String,
    #[serde(default)]
    pub note: String,
    #[serde(with = "iso_ts")]
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(default)]
    pub is_fixed: bool,
}

impl Transaction {
    /// Calendar day used for filtering and grouping; time-of-day is ignored.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Gamification counters persisted alongside the transaction list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub streak: u32,
    pub xp: u64,
    pub level: u32,
    #[serde(default)]
    pub last_active_date: String,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl Default for UserStats {
    fn default() -> Self {
        UserStats {
            streak: 0,
            xp: 0,
            level: 1,
            last_active_date: String::new(),
            badges: Vec::new(),
        }
    }
}

/// Full persisted state: one JSON blob under a single versioned key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub stats: UserStats,
}

impl AppState {
    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Full-replace-by-id semantics: an existing record with the same id is
    /// overwritten in place, otherwise the record is prepended.
    pub fn upsert(&mut self, tx: Transaction) {
        match self.transactions.iter_mut().find(|t| t.id == tx.id) {
            Some(existing) => *existing = tx,
            None => self.transactions.insert(0, tx),
        }
    }

    /// Deletes by id. Returns false when no record matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }
}

/// Timestamps serialize as RFC 3339 but deserialize from either a full
/// timestamp or a bare YYYY-MM-DD date, since both occur in stored blobs.
pub mod iso_ts {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        crate::utils::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
