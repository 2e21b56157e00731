// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Start of the date range (default: one month back)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("End of the date range (default: today)"),
    )
}

fn output_args(cmd: Command) -> Command {
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

fn tx_field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .value_parser(["expense", "income"])
            .help("Transaction type"),
    )
    .arg(Arg::new("category").long("category").help("Category label"))
    .arg(
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .help("Transaction date (default: now)"),
    )
    .arg(Arg::new("currency").long("currency").help("Currency label"))
    .arg(Arg::new("merchant").long("merchant").help("Merchant or source"))
    .arg(Arg::new("note").long("note").help("Free-form note"))
    .arg(
        Arg::new("fixed")
            .long("fixed")
            .action(ArgAction::SetTrue)
            .help("Mark as recurring/fixed (salary, rent, subscriptions)"),
    )
    .arg(
        Arg::new("variable")
            .long("variable")
            .action(ArgAction::SetTrue)
            .conflicts_with("fixed")
            .help("Mark as one-off/variable"),
    )
}

pub fn build_cli() -> Command {
    Command::new("wealthtrack")
        .about("Personal income/expense tracking with range analytics and AI-assisted entry")
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(tx_field_args(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true)),
                ))
                .subcommand(tx_field_args(
                    Command::new("edit")
                        .about("Replace a transaction's fields by id")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(output_args(range_args(
                    Command::new("list")
                        .about("List transactions in a date range, most recent first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Cap the number of rows"),
                        ),
                ))),
        )
        .subcommand(
            Command::new("report")
                .about("Range analytics over the transaction history")
                .subcommand(output_args(range_args(
                    Command::new("summary").about("Period totals, saving rate, and health"),
                )))
                .subcommand(output_args(range_args(
                    Command::new("timeline").about("Per-day groups with sub-totals"),
                )))
                .subcommand(output_args(
                    Command::new("categories").about("Known categories, defaults first"),
                )),
        )
        .subcommand(
            Command::new("ai")
                .about("Parse a free-text entry into a draft transaction")
                .arg(
                    Arg::new("text")
                        .required(true)
                        .help("e.g. \"Lunch RM25 yesterday\""),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the draft and record it"),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export the full transaction history")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .value_parser(["csv", "json"])
                            .default_value("csv"),
                    )
                    .arg(Arg::new("out").long("out").required(true).help("Output path")),
            ),
        )
        .subcommand(
            Command::new("profile")
                .about("Gamification stats and stored-state maintenance")
                .subcommand(Command::new("show").about("Show streak, XP, level, and badges"))
                .subcommand(
                    Command::new("reset")
                        .about("Clear all stored history (demo data reseeds on next run)")
                        .arg(Arg::new("yes").long("yes").action(ArgAction::SetTrue)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data against invariants"))
}
