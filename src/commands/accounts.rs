// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::ledger::accounts::{self, NewAccount};
use crate::models::AccountKind;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("totals", sub)) => totals(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = *sub.get_one::<i64>("user").unwrap();
    let name = sub.get_one::<String>("name").unwrap();
    let kind = AccountKind::parse(sub.get_one::<String>("kind").unwrap())?;
    let initial = parse_decimal(sub.get_one::<String>("initial").unwrap())?;
    let limit = sub
        .get_one::<String>("limit")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let id = accounts::add(
        conn,
        user_id,
        NewAccount {
            name: name.clone(),
            kind,
            initial_balance: initial,
            credit_limit: limit,
            closing_day: sub.get_one::<u32>("closing-day").copied(),
            due_day: sub.get_one::<u32>("due-day").copied(),
        },
    )?;
    println!("Added account '{}' ({}, id: {})", name, kind.as_str(), id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = *sub.get_one::<i64>("user").unwrap();
    let data = accounts::list_with_balance(conn, user_id)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|a| {
                vec![
                    a.id.to_string(),
                    a.name.clone(),
                    a.kind.as_str().to_string(),
                    fmt_money(&a.balance),
                    a.credit_limit.as_ref().map(fmt_money).unwrap_or_default(),
                    a.due_day.map(|d| d.to_string()).unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Kind", "Balance", "Limit", "Due"], rows)
        );
    }
    Ok(())
}

fn totals(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = *sub.get_one::<i64>("user").unwrap();
    let t = accounts::totals(conn, user_id)?;
    let rows = vec![
        vec!["Cash".to_string(), fmt_money(&t.cash_total)],
        vec!["Cards owed".to_string(), fmt_money(&t.cards_owed)],
    ];
    println!("{}", pretty_table(&["Group", "Total"], rows));
    Ok(())
}
