// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! First-run demo data: roughly three months of plausible history so the
//! reports have something to show. The spread is a deterministic function
//! of the day number.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{AppState, DEFAULT_CURRENCY, Transaction, TxKind, UserStats};
use crate::utils::midnight;

const SEED_DAYS: i64 = 95;

const FOOD_MERCHANTS: [&str; 4] = ["GrabFood", "Starbucks", "Nasi Lemak Stall", "Mamak"];

pub fn demo_state(today: NaiveDate) -> AppState {
    let mut transactions = Vec::new();

    for back in 0..SEED_DAYS {
        let day = today - Duration::days(back);
        let dom = day.day();

        // Payday: salary in, rent out, both fixed.
        if dom == 1 {
            transactions.push(entry(
                format!("inc-sal-{back}"),
                Decimal::from(6500),
                "Salary",
                "Tech Global Corp",
                "Monthly Payroll",
                day,
                TxKind::Income,
                true,
            ));
            transactions.push(entry(
                format!("exp-rent-{back}"),
                Decimal::from(1800),
                "Other",
                "Condo Mgmt",
                "Rental",
                day,
                TxKind::Expense,
                true,
            ));
        }

        // Weekly grocery run on Sundays.
        if day.weekday() == Weekday::Sun {
            transactions.push(entry(
                format!("exp-groc-{back}"),
                Decimal::from(150 + (back % 5) * 20),
                "Groceries",
                "Village Grocer",
                "Weekly stock",
                day,
                TxKind::Expense,
                false,
            ));
        }

        // Mid-month utilities.
        if dom == 15 {
            transactions.push(entry(
                format!("exp-util-{back}"),
                Decimal::from(220),
                "Utilities",
                "TNB/Syabas",
                "Water & Electric",
                day,
                TxKind::Expense,
                true,
            ));
        }

        // Zero to two meals a day.
        for meal in 0..(back % 3) {
            let merchant = FOOD_MERCHANTS[((back + meal) % 4) as usize];
            transactions.push(entry(
                format!("exp-food-{back}-{meal}"),
                Decimal::from(10 + (back * 7 + meal * 13) % 40),
                "Food & Drink",
                merchant,
                "Meal",
                day,
                TxKind::Expense,
                false,
            ));
        }

        // Occasional freelance income.
        if back % 17 == 3 {
            transactions.push(entry(
                format!("inc-free-{back}"),
                Decimal::from(200 + (back % 4) * 125),
                "Freelance",
                "Upwork Client",
                "Project Bonus",
                day,
                TxKind::Income,
                false,
            ));
        }
    }

    AppState {
        transactions,
        stats: demo_stats(today),
    }
}

fn demo_stats(today: NaiveDate) -> UserStats {
    UserStats {
        streak: 24,
        xp: 4850,
        level: 32,
        last_active_date: today.to_string(),
        badges: vec![
            "Early Bird".to_string(),
            "Saver".to_string(),
            "Income Booster".to_string(),
            "Quarterly Master".to_string(),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: String,
    amount: Decimal,
    category: &str,
    merchant: &str,
    note: &str,
    day: NaiveDate,
    kind: TxKind,
    is_fixed: bool,
) -> Transaction {
    Transaction {
        id,
        amount,
        currency: DEFAULT_CURRENCY.to_string(),
        category: category.to_string(),
        merchant: merchant.to_string(),
        note: note.to_string(),
        date: midnight(day),
        kind,
        is_fixed,
    }
}
