// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod reports;
pub mod transactions;
pub mod users;

use crate::error::{Error, Result};

/// Appends the optional month/year predicates shared by listing, summary and
/// category queries. Month-only matches that month across all years;
/// year-only matches the whole year; both together intersect.
pub(crate) fn push_period_filters(
    sql: &mut String,
    params: &mut Vec<String>,
    date_col: &str,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    if let Some(m) = month {
        if !(1..=12).contains(&m) {
            return Err(Error::Validation(format!(
                "Month must be between 1 and 12, got {}",
                m
            )));
        }
        sql.push_str(&format!(" AND strftime('%m', {}) = ?", date_col));
        params.push(format!("{:02}", m));
    }
    if let Some(y) = year {
        sql.push_str(&format!(" AND strftime('%Y', {}) = ?", date_col));
        params.push(format!("{:04}", y));
    }
    Ok(())
}

pub(crate) fn query_params(params: &[String]) -> Vec<&dyn rusqlite::ToSql> {
    params.iter().map(|s| s as &dyn rusqlite::ToSql).collect()
}
