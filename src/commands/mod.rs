// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ai;
pub mod doctor;
pub mod exporter;
pub mod profile;
pub mod reports;
pub mod transactions;
