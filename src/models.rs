// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Transaction kind. Stored as the lowercase string (`receita`/`despesa`);
/// the sign of the stored amount always matches the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Receita,
    Despesa,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Receita => "receita",
            TxKind::Despesa => "despesa",
        }
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        match s {
            "receita" => Ok(TxKind::Receita),
            "despesa" => Ok(TxKind::Despesa),
            other => Err(Error::Validation(format!(
                "Unknown transaction kind '{}', expected 'receita' or 'despesa'",
                other
            ))),
        }
    }
}

/// Account kind. Anything other than `CreditCard` is cash-like and counts
/// toward the cash total; credit cards are aggregated separately as owed
/// magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Wallet,
    Bank,
    CreditCard,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Wallet => "wallet",
            AccountKind::Bank => "bank",
            AccountKind::CreditCard => "credit_card",
        }
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        match s {
            "wallet" => Ok(AccountKind::Wallet),
            "bank" => Ok(AccountKind::Bank),
            "credit_card" => Ok(AccountKind::CreditCard),
            other => Err(Error::Validation(format!(
                "Unknown account kind '{}', expected 'wallet', 'bank' or 'credit_card'",
                other
            ))),
        }
    }

    pub fn is_credit_card(&self) -> bool {
        matches!(self, AccountKind::CreditCard)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
}

/// A single dated money movement, as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub kind: TxKind,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub user_id: i64,
    pub account_id: i64,
}

/// Listing row: a transaction joined with its account's display name.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: NaiveDate,
    pub kind: TxKind,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub account_id: i64,
    pub account_name: String,
}

/// An account with its balance recomputed from the full transaction history.
#[derive(Debug, Clone, Serialize)]
pub struct AccountBalance {
    pub id: i64,
    pub name: String,
    pub kind: AccountKind,
    pub credit_limit: Option<Decimal>,
    pub closing_day: Option<u32>,
    pub due_day: Option<u32>,
    pub balance: Decimal,
}

/// Cash-like balances and credit-card debt are separate figures; they are
/// never summed together.
#[derive(Debug, Clone, Serialize)]
pub struct AccountTotals {
    pub cash_total: Decimal,
    pub cards_owed: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}
