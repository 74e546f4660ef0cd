// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::Settings;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, anyhow};
use rust_decimal::Decimal;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(sub)?,
        Some(("show", sub)) => show(sub)?,
        _ => {}
    }
    Ok(())
}

fn set(sub: &clap::ArgMatches) -> Result<()> {
    let mut settings = Settings::load()?;
    let mut changed = false;
    if let Some(rate) = sub.get_one::<String>("exchange-rate") {
        let rate = parse_decimal(rate)?;
        if rate <= Decimal::ZERO {
            return Err(anyhow!("Exchange rate must be positive"));
        }
        settings.exchange_rate = rate;
        changed = true;
    }
    if let Some(goal) = sub.get_one::<String>("goal-percent") {
        settings.goal_percent = parse_decimal(goal)?;
        changed = true;
    }
    if let Some(loss) = sub.get_one::<String>("loss-percent") {
        settings.loss_percent = parse_decimal(loss)?;
        changed = true;
    }
    if let Some(count) = sub.get_one::<u32>("trade-count") {
        if *count == 0 {
            return Err(anyhow!("Trade count must be at least 1"));
        }
        settings.trade_count = *count;
        changed = true;
    }
    if !changed {
        return Err(anyhow!("Nothing to set; pass at least one option"));
    }
    settings.save()?;
    println!("Settings saved");
    Ok(())
}

fn show(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let settings = Settings::load()?;
    if !maybe_print_json(json_flag, jsonl_flag, &settings)? {
        let rows = vec![
            vec!["Exchange Rate (BRL)".into(), settings.exchange_rate.to_string()],
            vec!["Daily Goal %".into(), settings.goal_percent.to_string()],
            vec!["Stop Loss %".into(), settings.loss_percent.to_string()],
            vec!["Trades per Day".into(), settings.trade_count.to_string()],
        ];
        println!("{}", pretty_table(&["Setting", "Value"], rows));
    }
    Ok(())
}
