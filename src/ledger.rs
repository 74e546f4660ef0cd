// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly bankroll aggregation. Pure functions over already-loaded
//! trades and deposits; no I/O here.

use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Deposit, Trade};

pub fn monthly_profit(trades: &[Trade]) -> Decimal {
    trades.iter().map(|t| t.result).sum()
}

pub fn deposits_total(deposits: &[Deposit]) -> Decimal {
    deposits.iter().map(|d| d.value).sum()
}

/// Sum of trade results per day of month (1-based).
pub fn daily_results(trades: &[Trade]) -> BTreeMap<u32, Decimal> {
    let mut out = BTreeMap::new();
    for t in trades {
        *out.entry(t.date.day()).or_insert(Decimal::ZERO) += t.result;
    }
    out
}

/// Sum of deposit values per day of month (1-based).
pub fn daily_deposits(deposits: &[Deposit]) -> BTreeMap<u32, Decimal> {
    let mut out = BTreeMap::new();
    for d in deposits {
        *out.entry(d.date.day()).or_insert(Decimal::ZERO) += d.value;
    }
    out
}

/// final = initial + deposits + trade results.
pub fn final_balance(initial: Decimal, deposits_total: Decimal, profit: Decimal) -> Decimal {
    initial + deposits_total + profit
}

/// Monthly ROI measured against the initial balance only; deposits are not
/// part of the base. Zero when no initial balance is recorded.
pub fn profit_percent(profit: Decimal, initial: Decimal) -> Decimal {
    if initial > Decimal::ZERO {
        profit / initial * Decimal::from(100)
    } else {
        Decimal::ZERO
    }
}

/// Day-by-day running balance for one month: start from the initial
/// balance and fold in each day's results and deposits. One entry per
/// calendar day, 1..=days_in_month.
pub fn monthly_evolution(
    initial: Decimal,
    daily_results: &BTreeMap<u32, Decimal>,
    daily_deposits: &BTreeMap<u32, Decimal>,
    days_in_month: u32,
) -> Vec<Decimal> {
    let mut running = initial;
    (1..=days_in_month)
        .map(|day| {
            running += daily_results.get(&day).copied().unwrap_or(Decimal::ZERO);
            running += daily_deposits.get(&day).copied().unwrap_or(Decimal::ZERO);
            running
        })
        .collect()
}

/// Per-month closing balance for a year: each month's recorded initial
/// balance (0 when none was set) plus that month's profit. Months are not
/// chained into each other; the journal relies on the user recording the
/// next month's initial balance, so this is an approximation by design of
/// the original ledger, not a cumulative one.
pub fn yearly_evolution(
    year: i32,
    balances: &BTreeMap<String, Decimal>,
    trades: &[Trade],
) -> Vec<(String, Decimal)> {
    let mut profit_by_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in trades {
        let key = crate::utils::year_month(t.date);
        *profit_by_month.entry(key).or_insert(Decimal::ZERO) += t.result;
    }
    (1..=12)
        .map(|m| {
            let month = format!("{:04}-{:02}", year, m);
            let start = balances.get(&month).copied().unwrap_or(Decimal::ZERO);
            let profit = profit_by_month
                .get(&month)
                .copied()
                .unwrap_or(Decimal::ZERO);
            (month, start + profit)
        })
        .collect()
}
