// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::ledger::{push_period_filters, query_params};
use crate::models::{Transaction, TransactionRow, TxKind};

/// The single source of truth for the sign convention: expenses are stored
/// as the negated magnitude, income as the magnitude, whatever sign the
/// caller supplied. Applied on create and update, never on read.
pub fn normalized_amount(kind: TxKind, magnitude: Decimal) -> Decimal {
    match kind {
        TxKind::Despesa => -magnitude.abs(),
        TxKind::Receita => magnitude.abs(),
    }
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TxKind,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub user_id: i64,
    pub account_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct TransactionUpdate {
    pub kind: TxKind,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    /// `None` leaves the stored account untouched.
    pub account_id: Option<i64>,
}

/// Records a transaction dated today (server clock). The amount is
/// normalized before it is stored. An account is mandatory.
pub fn add(conn: &Connection, tx: NewTransaction) -> Result<i64> {
    let account_id = tx
        .account_id
        .ok_or_else(|| Error::Validation("An account must be selected".to_string()))?;
    let date = Local::now().date_naive();
    let amount = normalized_amount(tx.kind, tx.amount);
    conn.execute(
        "INSERT INTO transactions(date, kind, description, amount, category, user_id, account_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            date.to_string(),
            tx.kind.as_str(),
            tx.description,
            amount.to_string(),
            tx.category,
            tx.user_id,
            account_id
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// The user's transactions joined with their account names, newest first
/// (insertion order breaks same-day ties), optionally narrowed to a month
/// and/or year.
pub fn list(
    conn: &Connection,
    user_id: i64,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT t.id, t.date, t.kind, t.description, t.amount, t.category, t.account_id, a.name
         FROM transactions t
         JOIN accounts a ON t.account_id = a.id
         WHERE t.user_id = ?",
    );
    let mut params_vec = vec![user_id.to_string()];
    push_period_filters(&mut sql, &mut params_vec, "t.date", month, year)?;
    sql.push_str(" ORDER BY t.date DESC, t.id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(query_params(&params_vec)))?;

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let kind: String = r.get(2)?;
        let amount: String = r.get(4)?;
        data.push(TransactionRow {
            id: r.get(0)?,
            date: r.get::<_, NaiveDate>(1)?,
            kind: TxKind::parse(&kind)?,
            description: r.get(3)?,
            amount: amount.parse::<Decimal>()?,
            category: r.get(5)?,
            account_id: r.get(6)?,
            account_name: r.get(7)?,
        });
    }
    Ok(data)
}

/// Fetches one transaction, scoped by id AND owner. The edit path reads
/// through here so one user can never load another user's row.
pub fn get(conn: &Connection, id: i64, user_id: i64) -> Result<Option<Transaction>> {
    let row = conn
        .query_row(
            "SELECT id, date, kind, description, amount, category, user_id, account_id
             FROM transactions WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
            |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, NaiveDate>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, String>(4)?,
                    r.get::<_, String>(5)?,
                    r.get::<_, i64>(6)?,
                    r.get::<_, i64>(7)?,
                ))
            },
        )
        .optional()?;
    match row {
        Some((id, date, kind, description, amount, category, user_id, account_id)) => {
            Ok(Some(Transaction {
                id,
                date,
                kind: TxKind::parse(&kind)?,
                description,
                amount: amount.parse::<Decimal>()?,
                category,
                user_id,
                account_id,
            }))
        }
        None => Ok(None),
    }
}

/// Rewrites a transaction, re-normalizing the amount exactly as on create.
/// The predicate is always `id AND user_id`, so a mismatched owner is a
/// no-op reported as `false` — indistinguishable from a missing row.
pub fn update(conn: &Connection, id: i64, user_id: i64, patch: TransactionUpdate) -> Result<bool> {
    let amount = normalized_amount(patch.kind, patch.amount);
    let changed = conn.execute(
        "UPDATE transactions
         SET kind = ?1, description = ?2, amount = ?3, category = ?4,
             account_id = COALESCE(?5, account_id)
         WHERE id = ?6 AND user_id = ?7",
        params![
            patch.kind.as_str(),
            patch.description,
            amount.to_string(),
            patch.category,
            patch.account_id,
            id,
            user_id
        ],
    )?;
    Ok(changed > 0)
}

/// Same ownership predicate and same no-op contract as `update`.
pub fn delete(conn: &Connection, id: i64, user_id: i64) -> Result<bool> {
    let changed = conn.execute(
        "DELETE FROM transactions WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(changed > 0)
}
