// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn user_arg() -> Arg {
    // Stands in for the session layer's verified user id.
    Arg::new("user")
        .long("user")
        .value_parser(value_parser!(i64))
        .required(true)
        .help("Acting user id")
}

fn period_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("month")
            .long("month")
            .value_parser(value_parser!(u32).range(1..=12))
            .help("Only this calendar month (1-12)"),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .help("Only this calendar year"),
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

pub fn build_cli() -> Command {
    Command::new("billfold")
        .about("Personal finance ledger: accounts, income/expense transactions, period reports")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("user")
                .about("Registration and credential checks")
                .subcommand(
                    Command::new("register")
                        .about("Register a new user")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(
                    Command::new("login")
                        .about("Verify credentials and print the user id")
                        .arg(Arg::new("email").long("email").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                ),
        )
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Create an account")
                        .arg(user_arg())
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("wallet, bank or credit_card"),
                        )
                        .arg(
                            Arg::new("initial")
                                .long("initial")
                                .default_value("0")
                                .help("Initial balance (ignored for credit cards)"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .help("Credit limit (credit cards only)"),
                        )
                        .arg(
                            Arg::new("closing-day")
                                .long("closing-day")
                                .value_parser(value_parser!(u32).range(1..=31))
                                .help("Statement closing day (credit cards only)"),
                        )
                        .arg(
                            Arg::new("due-day")
                                .long("due-day")
                                .value_parser(value_parser!(u32).range(1..=31))
                                .help("Payment due day (credit cards only)"),
                        ),
                )
                .subcommand(output_args(
                    Command::new("list")
                        .about("List accounts with computed balances")
                        .arg(user_arg()),
                ))
                .subcommand(
                    Command::new("totals")
                        .about("Cash total and credit-card owed total")
                        .arg(user_arg()),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction dated today")
                        .arg(user_arg())
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .value_parser(value_parser!(i64))
                                .help("Account id"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("receita or despesa"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(output_args(period_args(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(user_arg()),
                )))
                .subcommand(
                    Command::new("edit")
                        .about("Rewrite one of your transactions")
                        .arg(user_arg())
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .value_parser(value_parser!(i64))
                                .required(true),
                        )
                        .arg(Arg::new("kind").long("kind").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .value_parser(value_parser!(i64))
                                .help("Move to this account id"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete one of your transactions")
                        .arg(user_arg())
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .value_parser(value_parser!(i64))
                                .required(true),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Period reports")
                .subcommand(output_args(period_args(
                    Command::new("summary")
                        .about("Income, expense and net for the period")
                        .arg(user_arg()),
                )))
                .subcommand(output_args(period_args(
                    Command::new("categories")
                        .about("Expenses grouped by category, most spent first")
                        .arg(user_arg()),
                ))),
        )
}
