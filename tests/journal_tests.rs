// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tradetrack::{cli, commands, db};

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn dispatch(conn: &Connection, argv: &[&str]) -> anyhow::Result<()> {
    let mut full = vec!["tradetrack"];
    full.extend_from_slice(argv);
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(full);
    match matches.subcommand() {
        Some(("trade", sub)) => commands::trades::handle(conn, sub),
        Some(("balance", sub)) => commands::balances::handle(conn, sub),
        Some(("deposit", sub)) => commands::deposits::handle(conn, sub),
        _ => panic!("unexpected subcommand"),
    }
}

#[test]
fn trade_add_stores_canonical_values() {
    let conn = setup();
    dispatch(
        &conn,
        &[
            "trade", "add", "--date", "2024-03-05", "--result", "57.92", "--asset", "WINFUT",
        ],
    )
    .unwrap();
    let (date, asset, result): (String, Option<String>, String) = conn
        .query_row("SELECT date, asset, result FROM trades", [], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?))
        })
        .unwrap();
    assert_eq!(date, "2024-03-05");
    assert_eq!(asset.as_deref(), Some("WINFUT"));
    assert_eq!(result, "57.92");
}

#[test]
fn trade_add_rejects_invalid_input() {
    let conn = setup();
    let err = dispatch(
        &conn,
        &["trade", "add", "--date", "03/05/2024", "--result", "1.00"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid date"));

    let err = dispatch(
        &conn,
        &["trade", "add", "--date", "2024-03-05", "--result", "abc"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid decimal"));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM trades", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn trade_rm_unknown_id_is_an_error() {
    let conn = setup();
    let err = dispatch(&conn, &["trade", "rm", "--id", "42"]).unwrap_err();
    assert!(err.to_string().contains("No trade with id 42"));
}

#[test]
fn balance_set_rejects_negative_values() {
    let conn = setup();
    let err = dispatch(
        &conn,
        &["balance", "set", "--month", "2024-03", "--value", "-1"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("must not be negative"));

    dispatch(
        &conn,
        &["balance", "set", "--month", "2024-03", "--value", "0"],
    )
    .unwrap();
    let value: String = conn
        .query_row("SELECT value FROM balances WHERE month='2024-03'", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(value, "0");
}

#[test]
fn balance_set_normalizes_unpadded_month_key() {
    let conn = setup();
    dispatch(
        &conn,
        &["balance", "set", "--month", "2024-3", "--value", "5000"],
    )
    .unwrap();
    // The stored key must match the YYYY-MM keys derived from trade and
    // deposit dates, or the month silently splits in two.
    let month: String = conn
        .query_row("SELECT month FROM balances", [], |r| r.get(0))
        .unwrap();
    assert_eq!(month, "2024-03");
    assert_eq!(
        tradetrack::store::balance_for(&conn, "2024-03")
            .unwrap()
            .unwrap(),
        "5000".parse::<rust_decimal::Decimal>().unwrap()
    );
}

#[test]
fn balance_set_rejects_malformed_month() {
    let conn = setup();
    let err = dispatch(
        &conn,
        &["balance", "set", "--month", "March", "--value", "100"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid month 'March'"));
}

#[test]
fn deposit_add_rejects_non_positive_values() {
    let conn = setup();
    for bad in ["0", "-5.00"] {
        let err = dispatch(
            &conn,
            &["deposit", "add", "--date", "2024-03-10", "--value", bad],
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM deposits", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn deposit_rm_removes_exactly_one() {
    let conn = setup();
    dispatch(
        &conn,
        &["deposit", "add", "--date", "2024-03-10", "--value", "100"],
    )
    .unwrap();
    dispatch(
        &conn,
        &["deposit", "add", "--date", "2024-03-11", "--value", "200"],
    )
    .unwrap();

    dispatch(&conn, &["deposit", "rm", "--id", "1"]).unwrap();
    let (count, left): (i64, String) = conn
        .query_row("SELECT COUNT(*), MAX(value) FROM deposits", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(left, "200");
}
