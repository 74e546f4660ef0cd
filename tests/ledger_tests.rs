// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tradetrack::ledger;
use tradetrack::models::{Deposit, Trade};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn trade(id: i64, date: &str, result: &str) -> Trade {
    Trade {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        asset: None,
        result: dec(result),
    }
}

fn deposit(id: i64, date: &str, value: &str) -> Deposit {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Deposit {
        id,
        date,
        value: dec(value),
        month: date.format("%Y-%m").to_string(),
    }
}

#[test]
fn monthly_profit_is_sum_of_results() {
    let trades = vec![
        trade(1, "2024-03-05", "57.92"),
        trade(2, "2024-03-05", "-10.00"),
        trade(3, "2024-03-20", "2.08"),
    ];
    assert_eq!(ledger::monthly_profit(&trades), dec("50.00"));
}

#[test]
fn final_balance_identity_holds() {
    let trades = vec![
        trade(1, "2024-03-01", "100.00"),
        trade(2, "2024-03-15", "-40.00"),
    ];
    let deposits = vec![deposit(1, "2024-03-10", "250.00")];
    let initial = dec("5000.00");
    let fin = ledger::final_balance(
        initial,
        ledger::deposits_total(&deposits),
        ledger::monthly_profit(&trades),
    );
    assert_eq!(fin, dec("5310.00"));
}

#[test]
fn profit_percent_is_zero_without_initial_balance() {
    assert_eq!(
        ledger::profit_percent(dec("50.00"), Decimal::ZERO),
        Decimal::ZERO
    );
    assert_eq!(
        ledger::profit_percent(dec("150.00"), dec("5000.00")),
        dec("3.00")
    );
}

#[test]
fn daily_results_partition_by_day() {
    let trades = vec![
        trade(1, "2024-03-05", "10.00"),
        trade(2, "2024-03-05", "5.00"),
        trade(3, "2024-03-07", "-2.00"),
    ];
    let daily = ledger::daily_results(&trades);
    assert_eq!(daily.get(&5), Some(&dec("15.00")));
    assert_eq!(daily.get(&7), Some(&dec("-2.00")));
    assert_eq!(daily.get(&6), None);
}

#[test]
fn monthly_evolution_folds_results_and_deposits() {
    let trades = vec![
        trade(1, "2024-03-01", "10.00"),
        trade(2, "2024-03-03", "-5.00"),
    ];
    let deposits = vec![deposit(1, "2024-03-02", "100.00")];
    let series = ledger::monthly_evolution(
        dec("1000.00"),
        &ledger::daily_results(&trades),
        &ledger::daily_deposits(&deposits),
        31,
    );
    assert_eq!(series.len(), 31);
    assert_eq!(series[0], dec("1010.00"));
    assert_eq!(series[1], dec("1110.00"));
    assert_eq!(series[2], dec("1105.00"));
    // No activity afterwards: the balance carries flat to month end.
    assert_eq!(series[30], dec("1105.00"));
}

#[test]
fn yearly_evolution_does_not_chain_months() {
    let mut balances = BTreeMap::new();
    balances.insert("2024-01".to_string(), dec("1000.00"));
    // February's initial balance was never recorded.
    let trades = vec![
        trade(1, "2024-01-10", "500.00"),
        trade(2, "2024-02-10", "70.00"),
    ];
    let year = ledger::yearly_evolution(2024, &balances, &trades);
    assert_eq!(year.len(), 12);
    assert_eq!(year[0], ("2024-01".to_string(), dec("1500.00")));
    // January's closing balance does not feed February.
    assert_eq!(year[1], ("2024-02".to_string(), dec("70.00")));
    assert_eq!(year[11], ("2024-12".to_string(), Decimal::ZERO));
}

#[test]
fn yearly_evolution_ignores_other_years() {
    let balances = BTreeMap::new();
    let trades = vec![
        trade(1, "2023-06-10", "999.00"),
        trade(2, "2024-06-10", "1.00"),
    ];
    let year = ledger::yearly_evolution(2024, &balances, &trades);
    assert_eq!(year[5], ("2024-06".to_string(), dec("1.00")));
}
