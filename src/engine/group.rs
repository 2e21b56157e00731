// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TxKind};

/// One calendar day of the timeline, carrying its own sub-totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub total_expense: Decimal,
    pub total_income: Decimal,
}

impl DayGroup {
    fn empty(date: NaiveDate) -> Self {
        DayGroup {
            date,
            transactions: Vec::new(),
            total_expense: Decimal::ZERO,
            total_income: Decimal::ZERO,
        }
    }

    pub fn net(&self) -> Decimal {
        self.total_income - self.total_expense
    }
}

/// Buckets transactions by calendar day, most recent day first. Within a
/// bucket the caller's ordering is preserved; the timeline command sorts
/// most-recent-first by full timestamp before grouping.
pub fn group_by_day(transactions: &[Transaction]) -> Vec<DayGroup> {
    let mut buckets: BTreeMap<NaiveDate, DayGroup> = BTreeMap::new();

    for t in transactions {
        let day = t.day();
        let group = buckets.entry(day).or_insert_with(|| DayGroup::empty(day));
        match t.kind {
            TxKind::Expense => group.total_expense += t.amount,
            TxKind::Income => group.total_income += t.amount,
        }
        group.transactions.push(t.clone());
    }

    buckets.into_values().rev().collect()
}
