// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tradetrack::settings::Settings;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn defaults_match_the_planner_defaults() {
    let s = Settings::default();
    assert_eq!(s.exchange_rate, dec("5.50"));
    assert_eq!(s.goal_percent, dec("3"));
    assert_eq!(s.loss_percent, dec("3"));
    assert_eq!(s.trade_count, 2);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let s = Settings::load_from(&path).unwrap();
    assert_eq!(s.exchange_rate, dec("5.50"));
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let s = Settings {
        exchange_rate: dec("5.12"),
        goal_percent: dec("2.5"),
        loss_percent: dec("1"),
        trade_count: 4,
    };
    s.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.exchange_rate, dec("5.12"));
    assert_eq!(loaded.goal_percent, dec("2.5"));
    assert_eq!(loaded.loss_percent, dec("1"));
    assert_eq!(loaded.trade_count, 4);
}

#[test]
fn partial_file_falls_back_to_field_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"trade_count": 3}"#).unwrap();
    let s = Settings::load_from(&path).unwrap();
    assert_eq!(s.trade_count, 3);
    assert_eq!(s.exchange_rate, dec("5.50"));
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(Settings::load_from(&path).is_err());
}
