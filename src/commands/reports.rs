// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::Settings;
use crate::utils::{
    days_in_month, fmt_money, maybe_print_json, month_label, parse_decimal, parse_month,
    pretty_table, split_month,
};
use crate::{ledger, store};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("daily", sub)) => daily(conn, sub)?,
        Some(("evolution", sub)) => evolution(conn, sub)?,
        Some(("planner", sub)) => planner(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub initial_balance: Decimal,
    pub deposits: Decimal,
    pub profit: Decimal,
    pub profit_percent: Decimal,
    pub final_balance: Decimal,
    pub exchange_rate: Decimal,
    pub final_balance_brl: Decimal,
}

/// Aggregate one month of the journal. The ROI base is the initial
/// balance alone, matching the dashboard's "% Lucro Mensal" card.
pub fn month_summary(conn: &Connection, month: &str, rate: Decimal) -> Result<MonthSummary> {
    let trades = store::month_trades(conn, month)?;
    let deposits = store::month_deposits(conn, month)?;
    let initial = store::balance_for(conn, month)?.unwrap_or(Decimal::ZERO);

    let profit = ledger::monthly_profit(&trades);
    let deposits_total = ledger::deposits_total(&deposits);
    let final_balance = ledger::final_balance(initial, deposits_total, profit);
    Ok(MonthSummary {
        month: month.to_string(),
        initial_balance: initial,
        deposits: deposits_total,
        profit,
        profit_percent: ledger::profit_percent(profit, initial).round_dp(2),
        final_balance,
        exchange_rate: rate,
        final_balance_brl: (final_balance * rate).round_dp(2),
    })
}

fn exchange_rate(sub: &clap::ArgMatches) -> Result<Decimal> {
    match sub.get_one::<String>("rate") {
        Some(r) => parse_decimal(r),
        None => Ok(Settings::load()?.exchange_rate),
    }
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let s = month_summary(conn, &month, exchange_rate(sub)?)?;
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Initial Balance".into(), fmt_money(&s.initial_balance)],
            vec!["Deposits".into(), fmt_money(&s.deposits)],
            vec!["Profit/Loss".into(), fmt_money(&s.profit)],
            vec!["Profit %".into(), format!("{}%", s.profit_percent)],
            vec!["Final Balance".into(), fmt_money(&s.final_balance)],
            vec![
                format!("Final (BRL @ {})", s.exchange_rate),
                fmt_money(&s.final_balance_brl),
            ],
        ];
        println!("{}", pretty_table(&[month_label(&month)?.as_str(), "Value"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct DailyRow {
    pub day: u32,
    pub result: Decimal,
}

fn daily(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let trades = store::month_trades(conn, &month)?;
    let data: Vec<DailyRow> = ledger::daily_results(&trades)
        .into_iter()
        .map(|(day, result)| DailyRow { day, result })
        .collect();
    if data.is_empty() {
        println!("No daily results for {}.", month_label(&month)?);
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| vec![format!("Day {}", r.day), fmt_money(&r.result)])
            .collect();
        println!("{}", pretty_table(&[month_label(&month)?.as_str(), "Result"], rows));
    }
    Ok(())
}

fn evolution(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;

    if sub.get_flag("year") {
        let (year, _) = split_month(&month)?;
        let balances = store::all_balances(conn)?;
        let trades = store::all_trades(conn)?;
        let data = ledger::yearly_evolution(year, &balances, &trades);
        if !maybe_print_json(json_flag, jsonl_flag, &data)? {
            let rows: Vec<Vec<String>> = data
                .iter()
                .map(|(m, v)| vec![m.clone(), fmt_money(v)])
                .collect();
            println!("{}", pretty_table(&["Month", "Balance"], rows));
        }
        return Ok(());
    }

    let trades = store::month_trades(conn, &month)?;
    let deposits = store::month_deposits(conn, &month)?;
    let initial = store::balance_for(conn, &month)?.unwrap_or(Decimal::ZERO);
    let series = ledger::monthly_evolution(
        initial,
        &ledger::daily_results(&trades),
        &ledger::daily_deposits(&deposits),
        days_in_month(&month)?,
    );
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows: Vec<Vec<String>> = series
            .iter()
            .enumerate()
            .map(|(i, v)| vec![format!("Day {}", i + 1), fmt_money(v)])
            .collect();
        println!("{}", pretty_table(&[month_label(&month)?.as_str(), "Balance"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct PlannerReport {
    pub bankroll: Decimal,
    pub goal_percent: Decimal,
    pub loss_percent: Decimal,
    pub trade_count: u32,
    pub goal_value: Decimal,
    pub loss_value: Decimal,
    pub goal_per_trade: Decimal,
}

/// Daily planner: profit target and stop loss as percentages of the
/// bankroll, and the per-trade slice of the target.
pub fn plan(bankroll: Decimal, settings: &Settings) -> PlannerReport {
    let hundred = Decimal::from(100);
    let goal_value = (bankroll * settings.goal_percent / hundred).round_dp(2);
    let loss_value = (bankroll * settings.loss_percent / hundred).round_dp(2);
    let goal_per_trade = if settings.trade_count > 0 {
        (goal_value / Decimal::from(settings.trade_count)).round_dp(2)
    } else {
        Decimal::ZERO
    };
    PlannerReport {
        bankroll,
        goal_percent: settings.goal_percent,
        loss_percent: settings.loss_percent,
        trade_count: settings.trade_count,
        goal_value,
        loss_value,
        goal_per_trade,
    }
}

fn planner(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let settings = Settings::load()?;
    let bankroll = match sub.get_one::<String>("balance") {
        Some(b) => parse_decimal(b)?,
        None => month_summary(conn, &month, settings.exchange_rate)?.final_balance,
    };
    if bankroll < Decimal::ZERO {
        return Err(anyhow!("Bankroll is negative; nothing to plan"));
    }
    let p = plan(bankroll, &settings);
    if !maybe_print_json(json_flag, jsonl_flag, &p)? {
        let rows = vec![
            vec!["Bankroll".into(), fmt_money(&p.bankroll)],
            vec![
                format!("Daily Goal ({}%)", p.goal_percent),
                fmt_money(&p.goal_value),
            ],
            vec![
                format!("Stop Loss ({}%)", p.loss_percent),
                fmt_money(&p.loss_value),
            ],
            vec![
                format!("Per Trade ({}x)", p.trade_count),
                fmt_money(&p.goal_per_trade),
            ],
        ];
        println!("{}", pretty_table(&["Target", "Value"], rows));
    }
    Ok(())
}
