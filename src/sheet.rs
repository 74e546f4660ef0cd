// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spreadsheet normalization for trade imports.
//!
//! Brokers and hand-kept sheets disagree on everything: header language
//! (Portuguese or English), column order, date format, and decimal
//! separator. This module turns one sheet of string cells into canonical
//! trades. All functions are pure; the file codec lives in the importer.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::NewTrade;

/// Header rows are only searched for this far into the sheet.
const HEADER_SCAN_ROWS: usize = 20;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static NUMERIC_JUNK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.,\-]").unwrap());

/// Column layout for a sheet, decided once before any row is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderScan {
    /// A header row named the columns we need.
    Recognized {
        header_row: usize,
        date_col: usize,
        asset_col: Option<usize>,
        result_col: usize,
    },
    /// No usable header; columns are taken positionally as
    /// date/asset/result. `skip_first_row` is set when the first row looks
    /// like a header we could not fully map.
    Unrecognized { skip_first_row: bool },
}

fn has_date_token(s: &str) -> bool {
    s.contains("data") || s.contains("date")
}

fn has_result_token(s: &str) -> bool {
    s.contains("resultado") || s.contains("result")
}

/// Scan the first rows for a header naming a date column and a result
/// column, in Portuguese or English. Cells must match exactly for date
/// ("data"/"date") and asset ("ativo"/"asset"); the result column only
/// needs to contain the token, so "Resultado ($)" still matches.
pub fn scan_header(rows: &[Vec<String>]) -> HeaderScan {
    for (i, row) in rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let joined = row.join(" ").to_lowercase();
        if !(has_date_token(&joined) && has_result_token(&joined)) {
            continue;
        }
        let mut date_col = None;
        let mut asset_col = None;
        let mut result_col = None;
        for (idx, cell) in row.iter().enumerate() {
            let c = cell.to_lowercase().trim().to_string();
            if c == "data" || c == "date" {
                date_col = Some(idx);
            } else if c == "ativo" || c == "asset" {
                asset_col = Some(idx);
            } else if has_result_token(&c) {
                result_col = Some(idx);
            }
        }
        if let (Some(date_col), Some(result_col)) = (date_col, result_col) {
            return HeaderScan::Recognized {
                header_row: i,
                date_col,
                asset_col,
                result_col,
            };
        }
    }
    let skip_first_row = rows
        .first()
        .map(|r| has_date_token(&r.join(" ").to_lowercase()))
        .unwrap_or(false);
    HeaderScan::Unrecognized { skip_first_row }
}

/// Normalize an ambiguous date cell to a calendar day.
///
/// Accepted: ISO `YYYY-MM-DD` (returned as-is), `YYYY/MM/DD`,
/// `DD/MM/YYYY`, `DD-MM-YYYY`, `DD.MM.YYYY`, and `DD/MM/YY` with the
/// century assumed to be 20xx. A trailing time ("2024-10-10 12:00") is
/// stripped first. Impossible dates are rejected.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let clean = raw.trim().split_whitespace().next()?;
    if ISO_DATE.is_match(clean) {
        return NaiveDate::parse_from_str(clean, "%Y-%m-%d").ok();
    }
    let parts: Vec<&str> = clean.split(['/', '-', '.']).collect();
    if parts.len() != 3 {
        return None;
    }
    let (y, m, d): (&str, &str, &str) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else if parts[2].len() == 4 {
        (parts[2], parts[1], parts[0])
    } else if parts[2].len() == 2 {
        return from_parts(2000 + parts[2].parse::<i32>().ok()?, parts[1], parts[0]);
    } else {
        return None;
    };
    from_parts(y.parse().ok()?, m, d)
}

fn from_parts(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Normalize a locale-ambiguous monetary cell to a decimal.
///
/// Currency symbols and spaces are stripped. When both separators appear
/// the rightmost one wins as the decimal separator ("1.234,56" and
/// "1,234.56" both become 1234.56). A lone comma is a decimal separator;
/// repeated commas are thousands separators.
pub fn normalize_result(raw: &str) -> Option<Decimal> {
    let mut s = NUMERIC_JUNK.replace_all(raw.trim(), "").into_owned();
    let has_comma = s.contains(',');
    let has_dot = s.contains('.');
    if has_comma && has_dot {
        if s.rfind(',') > s.rfind('.') {
            s = s.replace('.', "").replace(',', ".");
        } else {
            s = s.replace(',', "");
        }
    } else if has_comma {
        if s.matches(',').count() == 1 {
            s = s.replace(',', ".");
        } else {
            s = s.replace(',', "");
        }
    }
    s.parse::<Decimal>().ok()
}

/// Extract trades from a sheet of string cells. The column layout is
/// decided once via [`scan_header`]; malformed rows are silently skipped.
pub fn parse_rows(rows: &[Vec<String>]) -> Vec<NewTrade> {
    let (start, date_col, asset_col, result_col) = match scan_header(rows) {
        HeaderScan::Recognized {
            header_row,
            date_col,
            asset_col,
            result_col,
        } => (header_row + 1, date_col, asset_col, result_col),
        HeaderScan::Unrecognized { skip_first_row } => {
            (if skip_first_row { 1 } else { 0 }, 0, Some(1), 2)
        }
    };

    let mut trades = Vec::new();
    for row in rows.iter().skip(start) {
        let Some(date_cell) = row.get(date_col) else {
            continue;
        };
        let Some(result_cell) = row.get(result_col) else {
            continue;
        };
        if date_cell.trim().is_empty() || result_cell.trim().is_empty() {
            continue;
        }
        let Some(date) = normalize_date(date_cell) else {
            continue;
        };
        let Some(result) = normalize_result(result_cell) else {
            continue;
        };
        let asset = asset_col
            .and_then(|c| row.get(c))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        trades.push(NewTrade {
            date,
            asset,
            result,
        });
    }
    trades
}
