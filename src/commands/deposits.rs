// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;
    if value <= Decimal::ZERO {
        return Err(anyhow!("Deposit value must be positive"));
    }
    let id = store::add_deposit(conn, date, value)?;
    println!("Recorded deposit {} on {}: {}", id, date, fmt_money(&value));
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !store::delete_deposit(conn, id)? {
        return Err(anyhow!("No deposit with id {}", id));
    }
    println!("Deleted deposit {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let deposits = store::list_deposits(conn, month.as_deref())?;
    if !maybe_print_json(json_flag, jsonl_flag, &deposits)? {
        let rows: Vec<Vec<String>> = deposits
            .iter()
            .map(|d| {
                vec![
                    d.id.to_string(),
                    d.date.to_string(),
                    fmt_money(&d.value),
                    d.month.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Date", "Value", "Month"], rows));
    }
    Ok(())
}
