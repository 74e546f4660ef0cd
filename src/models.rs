// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single recorded profit/loss entry for a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub date: NaiveDate,
    pub asset: Option<String>,
    pub result: Decimal,
}

/// A trade parsed from a form or spreadsheet, before it has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrade {
    pub date: NaiveDate,
    pub asset: Option<String>,
    pub result: Decimal,
}

/// An external capital contribution added to a month's bankroll.
/// `month` is the derived YYYY-MM key, stored for easier filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposit {
    pub id: i64,
    pub date: NaiveDate,
    pub value: Decimal,
    pub month: String,
}

/// Starting capital recorded for a YYYY-MM month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBalance {
    pub month: String,
    pub value: Decimal,
}
