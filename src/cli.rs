// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tradetrack")
        .version(crate_version!())
        .about("Single-user trading journal: daily results, monthly bankroll, deposits, and reports")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the journal database"))
        .subcommand(
            Command::new("trade")
                .about("Record, list, and delete trade results")
                .subcommand(
                    Command::new("add")
                        .about("Record a trade result for a day")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("result")
                                .long("result")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Signed result, e.g. 57.92 or -10.00"),
                        )
                        .arg(Arg::new("asset").long("asset").help("Optional asset label")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List trades, newest first")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete one trade by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("balance")
                .about("Set and list monthly initial balances")
                .subcommand(
                    Command::new("set")
                        .about("Set (or overwrite) the initial balance for a month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM"))
                        .arg(
                            Arg::new("value")
                                .long("value")
                                .required(true)
                                .allow_hyphen_values(true),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List recorded initial balances"),
                )),
        )
        .subcommand(
            Command::new("deposit")
                .about("Record, list, and delete bankroll deposits")
                .subcommand(
                    Command::new("add")
                        .about("Record a deposit")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("value")
                                .long("value")
                                .required(true)
                                .allow_hyphen_values(true),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List deposits")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM")),
                ))
                .subcommand(
                    Command::new("rm").about("Delete one deposit by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly and yearly performance views")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Month summary: initial, deposits, profit, %, final balance")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM"))
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .help("Override the saved BRL exchange rate"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("daily")
                        .about("Per-day results for a month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
                ))
                .subcommand(json_flags(
                    Command::new("evolution")
                        .about("Running bankroll balance, day by day")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM"))
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .action(ArgAction::SetTrue)
                                .help("Per-month view for the whole year instead"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("planner")
                        .about("Daily goal, stop loss, and per-trade target")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM"))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .allow_hyphen_values(true)
                                .help("Override the bankroll (defaults to the month's final balance)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("import").about("Import trades from a spreadsheet").subcommand(
                Command::new("trades")
                    .about("Import trades from a CSV sheet (header detected, formats normalized)")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the journal")
                .subcommand(
                    Command::new("trades")
                        .about("Flat dump of all trades")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("workbook")
                        .about("One sheet per month: label, total, and trade table")
                        .arg(Arg::new("out").long("out").required(true).help("Output directory")),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("User-local preferences (kept outside the journal database)")
                .subcommand(
                    Command::new("set")
                        .about("Update one or more preferences")
                        .arg(Arg::new("exchange-rate").long("exchange-rate"))
                        .arg(Arg::new("goal-percent").long("goal-percent"))
                        .arg(Arg::new("loss-percent").long("loss-percent"))
                        .arg(
                            Arg::new("trade-count")
                                .long("trade-count")
                                .value_parser(value_parser!(u32)),
                        ),
                )
                .subcommand(json_flags(Command::new("show").about("Show current preferences"))),
        )
        .subcommand(Command::new("doctor").about("Consistency checks on the journal"))
}
