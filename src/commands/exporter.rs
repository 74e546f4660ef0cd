// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{fmt_money, month_label, year_month};
use crate::{ledger, store};
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::models::Trade;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("trades", sub)) => export_trades(conn, sub),
        Some(("workbook", sub)) => export_workbook(conn, sub),
        _ => Ok(()),
    }
}

fn export_trades(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let trades = store::all_trades(conn)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "asset", "result"])?;
            for t in &trades {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.asset.clone().unwrap_or_default(),
                    t.result.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = trades
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id, "date": t.date, "asset": t.asset, "result": t.result
                    })
                })
                .collect();
            fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
        }
    }
    println!("Exported {} trades to {}", trades.len(), out);
    Ok(())
}

/// One sheet per month, newest month first: a month label row, the month
/// total, a blank row, then the trade table in ascending date order. Each
/// sheet lands as <out>/<YYYY-MM>.csv.
fn export_workbook(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let trades = store::all_trades(conn)?;

    let mut by_month: BTreeMap<String, Vec<Trade>> = BTreeMap::new();
    for t in trades {
        by_month.entry(year_month(t.date)).or_default().push(t);
    }
    if by_month.is_empty() {
        return Err(anyhow!("No trades to export"));
    }

    let dir = Path::new(out);
    fs::create_dir_all(dir).with_context(|| format!("Create export dir {}", out))?;

    let mut sheets = 0usize;
    for (month, month_trades) in by_month.iter().rev() {
        let total = ledger::monthly_profit(month_trades);
        let path = dir.join(format!("{}.csv", month));
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
        wtr.write_record(["Month", month_label(month)?.as_str()])?;
        wtr.write_record(["Total", fmt_money(&total).as_str()])?;
        // An empty field per table column, so the separator row stays blank
        // instead of a quoted empty string.
        wtr.write_record(["", "", ""])?;
        wtr.write_record(["Date", "Asset", "Result"])?;
        for t in month_trades {
            wtr.write_record([
                t.date.to_string(),
                t.asset.clone().unwrap_or_default(),
                t.result.to_string(),
            ])?;
        }
        wtr.flush()?;
        sheets += 1;
    }
    println!("Exported {} month sheets to {}", sheets, out);
    Ok(())
}
