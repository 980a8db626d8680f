// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::ledger::transactions::{self, NewTransaction, TransactionUpdate};
use crate::models::TxKind;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind = TxKind::parse(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();
    let id = transactions::add(
        conn,
        NewTransaction {
            kind,
            description: description.clone(),
            amount,
            category: sub.get_one::<String>("category").unwrap().clone(),
            user_id: *sub.get_one::<i64>("user").unwrap(),
            account_id: sub.get_one::<i64>("account").copied(),
        },
    )?;
    println!("Recorded {} '{}' (id: {})", kind.as_str(), description, id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = *sub.get_one::<i64>("user").unwrap();
    let month = sub.get_one::<u32>("month").copied();
    let year = sub.get_one::<i32>("year").copied();
    let data = transactions::list(conn, user_id, month, year)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    t.description.clone(),
                    fmt_money(&t.amount),
                    t.category.clone(),
                    t.account_name.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Kind", "Description", "Amount", "Category", "Account"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let user_id = *sub.get_one::<i64>("user").unwrap();
    let kind = TxKind::parse(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let changed = transactions::update(
        conn,
        id,
        user_id,
        TransactionUpdate {
            kind,
            description: sub.get_one::<String>("description").unwrap().clone(),
            amount,
            category: sub.get_one::<String>("category").unwrap().clone(),
            account_id: sub.get_one::<i64>("account").copied(),
        },
    )?;
    if changed {
        println!("Updated transaction {}", id);
    } else {
        println!("Transaction not found");
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let user_id = *sub.get_one::<i64>("user").unwrap();
    if transactions::delete(conn, id, user_id)? {
        println!("Deleted transaction {}", id);
    } else {
        println!("Transaction not found");
    }
    Ok(())
}
