// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde::Serialize;

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
    let result = parse_decimal(sub.get_one::<String>("result").unwrap())?;
    let asset = sub
        .get_one::<String>("asset")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());
    let id = store::add_trade(conn, date, asset, result)?;
    println!(
        "Recorded trade {} on {}: {} ({})",
        id,
        date,
        fmt_money(&result),
        asset.unwrap_or("no asset")
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !store::delete_trade(conn, id)? {
        return Err(anyhow!("No trade with id {}", id));
    }
    println!("Deleted trade {}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TradeRow {
    pub id: i64,
    pub date: String,
    pub asset: String,
    pub result: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TradeRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let limit = sub.get_one::<usize>("limit").copied();
    let trades = store::list_trades(conn, month.as_deref(), limit)?;
    Ok(trades
        .into_iter()
        .map(|t| TradeRow {
            id: t.id,
            date: t.date.to_string(),
            asset: t.asset.unwrap_or_default(),
            result: fmt_money(&t.result),
        })
        .collect())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.asset.clone(),
                    r.result.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Date", "Asset", "Result"], rows));
    }
    Ok(())
}
