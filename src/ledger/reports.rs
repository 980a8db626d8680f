// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rusqlite::{Connection, params_from_iter};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::ledger::{push_period_filters, query_params};
use crate::models::{CategoryTotal, Summary, TxKind};

/// Income and expense totals for the period plus their plain sum. Stored
/// expenses are already negative, so the net needs no subtraction. An empty
/// period yields all zeros.
pub fn summary(
    conn: &Connection,
    user_id: i64,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<Summary> {
    let mut sql = String::from("SELECT kind, amount FROM transactions WHERE user_id = ?");
    let mut params_vec = vec![user_id.to_string()];
    push_period_filters(&mut sql, &mut params_vec, "date", month, year)?;

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(query_params(&params_vec)))?;

    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    while let Some(r) = rows.next()? {
        let kind: String = r.get(0)?;
        let amount: String = r.get(1)?;
        let amount = amount.parse::<Decimal>()?;
        match TxKind::parse(&kind)? {
            TxKind::Receita => income += amount,
            TxKind::Despesa => expense += amount,
        }
    }
    Ok(Summary {
        income,
        expense,
        net: income + expense,
    })
}

/// Expense totals per category, most spent first (totals are negative, so
/// ascending order puts the biggest spend on top). Income is excluded and
/// categories without matching expenses are simply absent.
pub fn by_category(
    conn: &Connection,
    user_id: i64,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<Vec<CategoryTotal>> {
    let mut sql = String::from(
        "SELECT category, amount FROM transactions WHERE kind = 'despesa' AND user_id = ?",
    );
    let mut params_vec = vec![user_id.to_string()];
    push_period_filters(&mut sql, &mut params_vec, "date", month, year)?;

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(query_params(&params_vec)))?;

    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    while let Some(r) = rows.next()? {
        let category: String = r.get(0)?;
        let amount: String = r.get(1)?;
        *agg.entry(category).or_insert(Decimal::ZERO) += amount.parse::<Decimal>()?;
    }

    let mut items: Vec<CategoryTotal> = agg
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    items.sort_by(|a, b| a.total.cmp(&b.total));
    Ok(items)
}
