// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{Error, Result};
use crate::models::User;

/// Tagged result of a registration attempt. A duplicate email is an expected
/// outcome, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created(i64),
    EmailTaken,
}

/// Registers a new user. The password is bcrypt-hashed before it touches the
/// store; the plaintext is never persisted. The email UNIQUE constraint is
/// caught and reported as `EmailTaken` rather than propagated.
pub fn register(conn: &Connection, email: &str, password: &str) -> Result<RegisterOutcome> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(Error::Validation(
            "Email and password are required".to_string(),
        ));
    }
    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    match conn.execute(
        "INSERT INTO users(email, password_hash) VALUES (?1, ?2)",
        params![email, hash],
    ) {
        Ok(_) => Ok(RegisterOutcome::Created(conn.last_insert_rowid())),
        Err(e) if is_unique_violation(&e) => Ok(RegisterOutcome::EmailTaken),
        Err(e) => Err(e.into()),
    }
}

/// Checks credentials and returns the user id on success. Unknown email and
/// wrong password both come back as `None` so callers cannot enumerate users.
pub fn verify(conn: &Connection, email: &str, password: &str) -> Result<Option<i64>> {
    let row: Option<(i64, String)> = conn
        .query_row(
            "SELECT id, password_hash FROM users WHERE email = ?1",
            params![email.trim()],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()?;
    if let Some((id, hash)) = row {
        if bcrypt::verify(password, &hash)? {
            return Ok(Some(id));
        }
    }
    Ok(None)
}

/// Identity lookup for the session collaborator.
pub fn find(conn: &Connection, user_id: i64) -> Result<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, email, password_hash FROM users WHERE id = ?1",
            params![user_id],
            |r| {
                Ok(User {
                    id: r.get(0)?,
                    email: r.get(1)?,
                    password_hash: r.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(user)
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    // Only SQLITE_CONSTRAINT_UNIQUE; a CHECK or FK failure must not be
    // mistaken for a duplicate email.
    matches!(
        e,
        rusqlite::Error::SqliteFailure(f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
