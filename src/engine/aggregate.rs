// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TxKind};

/// At most this many categories survive into `top_categories`.
const TOP_CATEGORY_LIMIT: usize = 4;

/// Qualitative tier derived from the expense-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Health {
    Healthy,
    Borderline,
    AtRisk,
}

impl Health {
    pub fn as_str(self) -> &'static str {
        match self {
            Health::Healthy => "healthy",
            Health::Borderline => "borderline",
            Health::AtRisk => "at-risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Summary statistics for one filtered period.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub income: Decimal,
    pub expense_total: Decimal,
    pub net: Decimal,
    pub avg_daily: Decimal,
    /// Integer percentage of income retained; negative or above 100 when
    /// net is negative or exceeds income. Deliberately unclamped.
    pub saving_rate: i64,
    pub fixed_total: Decimal,
    pub variable_total: Decimal,
    pub top_categories: Vec<CategoryTotal>,
    pub health: Health,
}

/// Computes period aggregates over an already-filtered transaction set in a
/// single pass. An empty input yields all-zero totals and `Healthy`.
pub fn aggregate(transactions: &[Transaction], days_in_range: i64) -> PeriodSummary {
    let mut income = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;
    let mut fixed_total = Decimal::ZERO;
    let mut by_category: Vec<CategoryTotal> = Vec::new();

    for t in transactions {
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => {
                expense_total += t.amount;
                if t.is_fixed {
                    fixed_total += t.amount;
                }
                match by_category.iter_mut().find(|c| c.category == t.category) {
                    Some(entry) => entry.total += t.amount,
                    None => by_category.push(CategoryTotal {
                        category: t.category.clone(),
                        total: t.amount,
                    }),
                }
            }
        }
    }

    let net = income - expense_total;
    let avg_daily = expense_total / Decimal::from(days_in_range.max(1));
    // Half-up rounding: 2.5% reports as 3, not banker's 2.
    let saving_rate = if income > Decimal::ZERO {
        (net / income * Decimal::ONE_HUNDRED + Decimal::new(5, 1))
            .floor()
            .to_i64()
            .unwrap_or_default()
    } else {
        0
    };

    // Stable sort: categories with equal totals keep first-encountered order.
    by_category.sort_by(|a, b| b.total.cmp(&a.total));
    by_category.truncate(TOP_CATEGORY_LIMIT);

    PeriodSummary {
        income,
        expense_total,
        net,
        avg_daily,
        saving_rate,
        fixed_total,
        variable_total: expense_total - fixed_total,
        top_categories: by_category,
        health: classify(income, expense_total),
    }
}

/// Tiers: ratio > 0.9 is at-risk, 0.7 < ratio <= 0.9 is borderline,
/// ratio <= 0.7 is healthy. With zero income, any spending pins the ratio
/// at 1.2; no activity at all reads as 0.
fn classify(income: Decimal, expense_total: Decimal) -> Health {
    let ratio = if income > Decimal::ZERO {
        expense_total / income
    } else if expense_total > Decimal::ZERO {
        Decimal::new(12, 1)
    } else {
        Decimal::ZERO
    };

    if ratio > Decimal::new(9, 1) {
        Health::AtRisk
    } else if ratio > Decimal::new(7, 1) {
        Health::Borderline
    } else {
        Health::Healthy
    }
}
