// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The aggregation and categorization engine: pure functions over a
//! snapshot of the transaction list, recomputed on every read.

pub mod aggregate;
pub mod categories;
pub mod filter;
pub mod group;

pub use aggregate::{CategoryTotal, Health, PeriodSummary, aggregate};
pub use categories::{DEFAULT_CATEGORIES, category_registry};
pub use filter::{days_in_range, filter_range};
pub use group::{DayGroup, group_by_day};
