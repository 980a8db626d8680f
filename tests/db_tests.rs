// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::db;
use rusqlite::Connection;

#[test]
fn schema_init_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("billfold.sqlite");
    let conn = Connection::open(&path).unwrap();
    db::init_schema(&conn).unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO users(email, password_hash) VALUES ('ana@example.com', 'x')",
        [],
    )
    .unwrap();
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    // No such user or account.
    let res = conn.execute(
        "INSERT INTO transactions(date, kind, description, amount, category, user_id, account_id)
         VALUES ('2024-03-01', 'despesa', 'x', '-1', 'geral', 42, 42)",
        [],
    );
    assert!(res.is_err());
}
