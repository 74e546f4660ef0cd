// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tradetrack::models::NewTrade;
use tradetrack::{db, store};

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn delete_trade_removes_exactly_one() {
    let conn = setup();
    let a = store::add_trade(&conn, day("2024-03-05"), Some("WINFUT"), dec("57.92")).unwrap();
    let b = store::add_trade(&conn, day("2024-03-05"), Some("WINFUT"), dec("-10.00")).unwrap();
    assert_ne!(a, b);

    assert!(store::delete_trade(&conn, a).unwrap());
    let remaining = store::all_trades(&conn).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b);
    assert_eq!(remaining[0].result, dec("-10.00"));

    // Deleting an unknown id touches nothing.
    assert!(!store::delete_trade(&conn, a).unwrap());
    assert_eq!(store::all_trades(&conn).unwrap().len(), 1);
}

#[test]
fn list_trades_is_newest_first_and_respects_limit() {
    let conn = setup();
    for d in ["2024-03-01", "2024-03-03", "2024-03-02"] {
        store::add_trade(&conn, day(d), None, dec("1.00")).unwrap();
    }
    let all = store::list_trades(&conn, None, None).unwrap();
    assert_eq!(all[0].date, day("2024-03-03"));
    assert_eq!(all[2].date, day("2024-03-01"));

    let limited = store::list_trades(&conn, Some("2024-03"), Some(2)).unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].date, day("2024-03-03"));
}

#[test]
fn month_trades_filters_by_month() {
    let conn = setup();
    store::add_trade(&conn, day("2024-03-05"), None, dec("1.00")).unwrap();
    store::add_trade(&conn, day("2024-04-05"), None, dec("2.00")).unwrap();
    let march = store::month_trades(&conn, "2024-03").unwrap();
    assert_eq!(march.len(), 1);
    assert_eq!(march[0].result, dec("1.00"));
}

#[test]
fn balance_set_overwrites_the_month() {
    let conn = setup();
    assert_eq!(store::balance_for(&conn, "2024-03").unwrap(), None);
    store::set_balance(&conn, "2024-03", dec("5000.00")).unwrap();
    store::set_balance(&conn, "2024-03", dec("6000.00")).unwrap();
    assert_eq!(
        store::balance_for(&conn, "2024-03").unwrap(),
        Some(dec("6000.00"))
    );
    assert_eq!(store::all_balances(&conn).unwrap().len(), 1);
}

#[test]
fn deposit_month_key_is_derived_from_date() {
    let conn = setup();
    let id = store::add_deposit(&conn, day("2024-03-10"), dec("250.00")).unwrap();
    let deposits = store::month_deposits(&conn, "2024-03").unwrap();
    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].id, id);
    assert_eq!(deposits[0].month, "2024-03");

    assert!(store::delete_deposit(&conn, id).unwrap());
    assert!(!store::delete_deposit(&conn, id).unwrap());
    assert!(store::month_deposits(&conn, "2024-03").unwrap().is_empty());
}

#[test]
fn insert_trades_is_atomic() {
    let mut conn = setup();
    let batch = vec![
        NewTrade {
            date: day("2024-03-05"),
            asset: Some("WINFUT".into()),
            result: dec("57.92"),
        },
        NewTrade {
            date: day("2024-03-06"),
            asset: None,
            result: dec("-10.00"),
        },
    ];
    store::insert_trades(&mut conn, &batch).unwrap();
    assert_eq!(store::all_trades(&conn).unwrap().len(), 2);
}
