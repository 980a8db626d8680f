// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::ledger::users::{self, RegisterOutcome};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("register", sub)) => register(conn, sub)?,
        Some(("login", sub)) => login(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn register(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    match users::register(conn, email, password)? {
        RegisterOutcome::Created(id) => println!("Registered '{}' (user: {})", email, id),
        RegisterOutcome::EmailTaken => println!("Email already registered"),
    }
    Ok(())
}

fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    // One message for unknown email and wrong password alike.
    match users::verify(conn, email, password)? {
        Some(id) => println!("{}", id),
        None => println!("Invalid email or password"),
    }
    Ok(())
}
