// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, parse_month, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;
    if value < Decimal::ZERO {
        return Err(anyhow!("Initial balance must not be negative"));
    }
    store::set_balance(conn, &month, value)?;
    println!("Initial balance for {} = {}", month, fmt_money(&value));
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let balances = store::list_balances(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &balances)? {
        let rows: Vec<Vec<String>> = balances
            .iter()
            .map(|b| vec![b.month.clone(), fmt_money(&b.value)])
            .collect();
        println!("{}", pretty_table(&["Month", "Initial Balance"], rows));
    }
    Ok(())
}
