// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wealthtrack::engine::{DEFAULT_CATEGORIES, category_registry};
use wealthtrack::models::{Transaction, TxKind};
use wealthtrack::utils::midnight;

fn tx(id: &str, category: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::from(10),
        currency: "RM".to_string(),
        category: category.to_string(),
        merchant: String::new(),
        note: String::new(),
        date: midnight(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        kind: TxKind::Expense,
        is_fixed: false,
    }
}

#[test]
fn empty_store_yields_default_list() {
    let registry = category_registry(&[]);
    assert_eq!(registry.len(), DEFAULT_CATEGORIES.len());
    assert_eq!(registry.first().map(String::as_str), Some("Food & Drink"));
    assert_eq!(registry.last().map(String::as_str), Some("Other"));
}

#[test]
fn novel_categories_appended_in_first_appearance_order() {
    let txs = vec![
        tx("a", "Pets"),
        tx("b", "Transport"), // already a default
        tx("c", "Gadgets"),
        tx("d", "Pets"), // duplicate
    ];
    let registry = category_registry(&txs);

    assert_eq!(registry.len(), DEFAULT_CATEGORIES.len() + 2);
    assert_eq!(registry[DEFAULT_CATEGORIES.len()], "Pets");
    assert_eq!(registry[DEFAULT_CATEGORIES.len() + 1], "Gadgets");
    // Defaults stay first, in their fixed order.
    for (i, default) in DEFAULT_CATEGORIES.iter().enumerate() {
        assert_eq!(&registry[i], default);
    }
}

#[test]
fn empty_category_values_are_excluded() {
    let txs = vec![tx("a", ""), tx("b", "Pets")];
    let registry = category_registry(&txs);
    assert!(!registry.iter().any(String::is_empty));
    assert!(registry.contains(&"Pets".to_string()));
}

#[test]
fn registry_is_idempotent_and_duplicate_free() {
    let txs = vec![tx("a", "Pets"), tx("b", "Gadgets"), tx("c", "Pets")];
    let first = category_registry(&txs);
    let second = category_registry(&txs);
    assert_eq!(first, second);

    let mut deduped = first.clone();
    deduped.dedup();
    assert_eq!(first, deduped);
}
