// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors produced by the ledger layer.
///
/// Two expected outcomes are deliberately NOT errors: an ownership mismatch
/// on update/delete returns `false` (so a caller cannot distinguish "does
/// not exist" from "not yours"), and a duplicate email on registration comes
/// back as `RegisterOutcome::EmailTaken`.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input is missing or malformed. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// The underlying store failed. Rendered generically to callers.
    #[error("storage failure")]
    Store(#[from] rusqlite::Error),

    /// A stored amount could not be read back as a decimal.
    #[error("invalid decimal in store")]
    Decimal(#[from] rust_decimal::Error),

    #[error("password hashing failure")]
    Hash(#[from] bcrypt::BcryptError),
}

pub type Result<T> = std::result::Result<T, Error>;
