// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rusqlite::{Connection, params};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{AccountBalance, AccountKind, AccountTotals};

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub kind: AccountKind,
    pub initial_balance: Decimal,
    pub credit_limit: Option<Decimal>,
    pub closing_day: Option<u32>,
    pub due_day: Option<u32>,
}

/// Creates an account for `user_id` and returns its id.
///
/// Credit cards always start at zero regardless of the supplied initial
/// balance; the limit/closing/due fields are only stored for credit cards
/// and discarded for cash-like kinds.
pub fn add(conn: &Connection, user_id: i64, account: NewAccount) -> Result<i64> {
    let name = account.name.trim();
    if name.is_empty() {
        return Err(Error::Validation("Account name is required".to_string()));
    }
    let (initial, limit, closing, due) = if account.kind.is_credit_card() {
        (
            Decimal::ZERO,
            account.credit_limit,
            account.closing_day,
            account.due_day,
        )
    } else {
        (account.initial_balance, None, None, None)
    };
    conn.execute(
        "INSERT INTO accounts(user_id, name, initial_balance, kind, credit_limit, closing_day, due_day)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id,
            name,
            initial.to_string(),
            account.kind.as_str(),
            limit.map(|d| d.to_string()),
            closing,
            due
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All of a user's accounts with balances recomputed from scratch:
/// `initial_balance + SUM(amount)` over exactly that account's transactions,
/// an empty history counting as zero. One joined query, no per-account
/// lookups; amounts are folded as decimals so nothing goes through floats.
/// The join requires the transaction's owner to match the account's owner,
/// so a row recorded by another user against this account never counts.
pub fn list_with_balance(conn: &Connection, user_id: i64) -> Result<Vec<AccountBalance>> {
    let mut stmt = conn.prepare(
        "SELECT a.id, a.name, a.kind, a.initial_balance, a.credit_limit,
                a.closing_day, a.due_day, t.amount
         FROM accounts a
         LEFT JOIN transactions t ON t.account_id = a.id AND t.user_id = a.user_id
         WHERE a.user_id = ?1",
    )?;
    let mut rows = stmt.query(params![user_id])?;

    let mut by_id: BTreeMap<i64, AccountBalance> = BTreeMap::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let amount: Option<String> = r.get(7)?;
        if !by_id.contains_key(&id) {
            let name: String = r.get(1)?;
            let kind: String = r.get(2)?;
            let initial: String = r.get(3)?;
            let limit: Option<String> = r.get(4)?;
            by_id.insert(
                id,
                AccountBalance {
                    id,
                    name,
                    kind: AccountKind::parse(&kind)?,
                    credit_limit: limit.map(|s| s.parse::<Decimal>()).transpose()?,
                    closing_day: r.get(5)?,
                    due_day: r.get(6)?,
                    balance: initial.parse::<Decimal>()?,
                },
            );
        }
        if let Some(amt) = amount {
            if let Some(acc) = by_id.get_mut(&id) {
                acc.balance += amt.parse::<Decimal>()?;
            }
        }
    }
    Ok(by_id.into_values().collect())
}

/// Partitions balances into the two dashboard figures: the signed sum of
/// cash-like balances and the owed magnitude of credit cards. A card balance
/// is conventionally negative while money is owed, so the owed figure is the
/// sum of absolute values. The two totals stay separate.
pub fn totals(conn: &Connection, user_id: i64) -> Result<AccountTotals> {
    let mut cash_total = Decimal::ZERO;
    let mut cards_owed = Decimal::ZERO;
    for account in list_with_balance(conn, user_id)? {
        if account.kind.is_credit_card() {
            cards_owed += account.balance.abs();
        } else {
            cash_total += account.balance;
        }
    }
    Ok(AccountTotals {
        cash_total,
        cards_owed,
    })
}
