// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::sheet;
use crate::store;
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("trades", sub)) => import_trades(conn, sub),
        _ => Ok(()),
    }
}

fn import_trades(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let rows = read_sheet(path)?;

    let trades = sheet::parse_rows(&rows);
    if trades.is_empty() {
        return Err(anyhow!(
            "No valid trades found in {}; expected Date and Result columns",
            path
        ));
    }

    // One batch; a failure leaves the journal untouched.
    store::insert_trades(conn, &trades)?;
    println!("Imported {} trades from {}", trades.len(), path);
    Ok(())
}

/// Read a CSV sheet as raw string cells. Header detection happens later in
/// `sheet`, so the reader treats every line as data and tolerates ragged
/// row lengths.
fn read_sheet(path: &str) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open sheet {}", path))?;
    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result.with_context(|| format!("Read sheet {}", path))?;
        rows.push(rec.iter().map(|s| s.to_string()).collect());
    }
    Ok(rows)
}
