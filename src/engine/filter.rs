// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::models::Transaction;

/// Selects the subset whose calendar day falls within the closed interval
/// `[start, end]`. Time-of-day never participates in the comparison, and an
/// empty result is a valid outcome, not an error. Callers are responsible
/// for handing in `start <= end`.
pub fn filter_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| {
            let day = t.day();
            day >= start && day <= end
        })
        .cloned()
        .collect()
}

/// Inclusive day count of a range, never below 1.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(1)
}
