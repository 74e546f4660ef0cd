// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{pretty_table, year_month};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use crate::store;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Months with trades or deposits but no recorded initial balance:
    // their summaries and yearly view silently assume 0.
    let balances = store::all_balances(conn)?;
    let mut active_months = BTreeSet::new();
    for t in store::all_trades(conn)? {
        active_months.insert(year_month(t.date));
    }
    let deposits = store::list_deposits(conn, None)?;
    for d in &deposits {
        active_months.insert(d.month.clone());
    }
    for month in &active_months {
        if !balances.contains_key(month) {
            rows.push(vec!["missing_initial_balance".into(), month.clone()]);
        }
    }

    // 2) Deposits whose stored month key disagrees with their date.
    for d in &deposits {
        if d.month != year_month(d.date) {
            rows.push(vec![
                "deposit_month_mismatch".into(),
                format!("deposit {} on {} keyed {}", d.id, d.date, d.month),
            ]);
        }
    }

    // 3) Deposits that should never have been accepted.
    for d in &deposits {
        if d.value <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_deposit".into(),
                format!("deposit {} = {}", d.id, d.value),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
