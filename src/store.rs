// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! All reads and writes against the journal collections. Commands go
//! through these operations instead of embedding their own mutating SQL.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Deposit, MonthlyBalance, NewTrade, Trade};
use crate::utils::year_month;

pub fn add_trade(
    conn: &Connection,
    date: NaiveDate,
    asset: Option<&str>,
    result: Decimal,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO trades(date, asset, result) VALUES (?1, ?2, ?3)",
        params![date.to_string(), asset, result.to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a batch of imported trades in one transaction. A failure on any
/// row aborts the whole import with nothing applied.
pub fn insert_trades(conn: &mut Connection, trades: &[NewTrade]) -> Result<()> {
    let tx = conn.transaction()?;
    for t in trades {
        tx.execute(
            "INSERT INTO trades(date, asset, result) VALUES (?1, ?2, ?3)",
            params![t.date.to_string(), t.asset, t.result.to_string()],
        )?;
    }
    tx.commit()?;
    Ok(())
}

/// Delete one trade by id. Returns false when no trade had that id.
pub fn delete_trade(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM trades WHERE id=?1", params![id])?;
    Ok(n == 1)
}

pub fn list_trades(
    conn: &Connection,
    month: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Trade>> {
    let mut sql = String::from("SELECT id, date, asset, result FROM trades");
    let mut args: Vec<String> = Vec::new();
    if let Some(m) = month {
        sql.push_str(" WHERE substr(date,1,7)=?1");
        args.push(m.to_string());
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(n) = limit {
        sql.push_str(" LIMIT ?");
        args.push(n.to_string());
    }
    let mut stmt = conn.prepare(&sql)?;
    let args: Vec<&dyn rusqlite::ToSql> = args.iter().map(|s| s as &dyn rusqlite::ToSql).collect();
    let mut rows = stmt.query(rusqlite::params_from_iter(args))?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(trade_from_row(r)?);
    }
    Ok(out)
}

/// Trades of one YYYY-MM month, ascending by date.
pub fn month_trades(conn: &Connection, month: &str) -> Result<Vec<Trade>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, asset, result FROM trades WHERE substr(date,1,7)=?1 ORDER BY date, id",
    )?;
    let mut rows = stmt.query(params![month])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(trade_from_row(r)?);
    }
    Ok(out)
}

pub fn all_trades(conn: &Connection) -> Result<Vec<Trade>> {
    let mut stmt = conn.prepare("SELECT id, date, asset, result FROM trades ORDER BY date, id")?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(trade_from_row(r)?);
    }
    Ok(out)
}

fn trade_from_row(r: &rusqlite::Row<'_>) -> Result<Trade> {
    let id: i64 = r.get(0)?;
    let date: String = r.get(1)?;
    let asset: Option<String> = r.get(2)?;
    let result: String = r.get(3)?;
    Ok(Trade {
        id,
        date: parse_stored_date(&date)?,
        asset,
        result: parse_stored_decimal(&result)?,
    })
}

/// Set (or overwrite) the initial balance recorded for a month.
pub fn set_balance(conn: &Connection, month: &str, value: Decimal) -> Result<()> {
    conn.execute(
        "INSERT INTO balances(month, value) VALUES (?1, ?2)
         ON CONFLICT(month) DO UPDATE SET value=excluded.value",
        params![month, value.to_string()],
    )?;
    Ok(())
}

pub fn balance_for(conn: &Connection, month: &str) -> Result<Option<Decimal>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM balances WHERE month=?1",
            params![month],
            |r| r.get(0),
        )
        .optional()?;
    v.as_deref().map(parse_stored_decimal).transpose()
}

pub fn all_balances(conn: &Connection) -> Result<BTreeMap<String, Decimal>> {
    let mut stmt = conn.prepare("SELECT month, value FROM balances ORDER BY month")?;
    let mut rows = stmt.query([])?;
    let mut out = BTreeMap::new();
    while let Some(r) = rows.next()? {
        let month: String = r.get(0)?;
        let value: String = r.get(1)?;
        out.insert(month, parse_stored_decimal(&value)?);
    }
    Ok(out)
}

pub fn list_balances(conn: &Connection) -> Result<Vec<MonthlyBalance>> {
    Ok(all_balances(conn)?
        .into_iter()
        .map(|(month, value)| MonthlyBalance { month, value })
        .collect())
}

/// Record a deposit; the YYYY-MM key is derived from the date.
pub fn add_deposit(conn: &Connection, date: NaiveDate, value: Decimal) -> Result<i64> {
    conn.execute(
        "INSERT INTO deposits(date, value, month) VALUES (?1, ?2, ?3)",
        params![date.to_string(), value.to_string(), year_month(date)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete one deposit by id. Returns false when no deposit had that id.
pub fn delete_deposit(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM deposits WHERE id=?1", params![id])?;
    Ok(n == 1)
}

pub fn list_deposits(conn: &Connection, month: Option<&str>) -> Result<Vec<Deposit>> {
    let mut sql = String::from("SELECT id, date, value, month FROM deposits");
    if month.is_some() {
        sql.push_str(" WHERE month=?1");
    }
    sql.push_str(" ORDER BY date, id");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = match month {
        Some(m) => stmt.query(params![m])?,
        None => stmt.query([])?,
    };
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let value: String = r.get(2)?;
        let month: String = r.get(3)?;
        out.push(Deposit {
            id,
            date: parse_stored_date(&date)?,
            value: parse_stored_decimal(&value)?,
            month,
        });
    }
    Ok(out)
}

pub fn month_deposits(conn: &Connection, month: &str) -> Result<Vec<Deposit>> {
    list_deposits(conn, Some(month))
}

fn parse_stored_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid stored date '{}'", s))
}

fn parse_stored_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid stored amount '{}'", s))
}
