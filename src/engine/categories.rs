// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;

/// Fixed defaults, always first and in this order.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Drink",
    "Transport",
    "Shopping",
    "Entertainment",
    "Health",
    "Utilities",
    "Groceries",
    "Salary",
    "Freelance",
    "Other",
];

/// Ordered union of the default list and every distinct category observed
/// in the store: defaults first, then novel categories by first appearance.
/// Empty category values are excluded, and the result is duplicate-free.
pub fn category_registry(transactions: &[Transaction]) -> Vec<String> {
    let mut out: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for t in transactions {
        if t.category.is_empty() {
            continue;
        }
        if !out.contains(&t.category) {
            out.push(t.category.clone());
        }
    }
    out
}
