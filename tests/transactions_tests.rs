// Copyright (c) 2025 Billfold Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::db;
use billfold::error::Error;
use billfold::ledger::transactions::{
    self, NewTransaction, TransactionUpdate, normalized_amount,
};
use billfold::models::TxKind;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO users(id, email, password_hash) VALUES
            (1,'ana@example.com','x'), (2,'bob@example.com','x');
        INSERT INTO accounts(id, user_id, name, initial_balance, kind) VALUES
            (1, 1, 'Carteira', '0', 'wallet'),
            (2, 1, 'Banco', '0', 'bank'),
            (3, 2, 'Outra', '0', 'wallet');
        "#,
    )
    .unwrap();
    conn
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn new_tx(kind: TxKind, amount: &str) -> NewTransaction {
    NewTransaction {
        kind,
        description: "teste".to_string(),
        amount: dec(amount),
        category: "geral".to_string(),
        user_id: 1,
        account_id: Some(1),
    }
}

fn seed(conn: &Connection, date: &str, kind: &str, amount: &str, category: &str, user: i64, account: i64) {
    conn.execute(
        "INSERT INTO transactions(date, kind, description, amount, category, user_id, account_id)
         VALUES (?1, ?2, 'seed', ?3, ?4, ?5, ?6)",
        params![date, kind, amount, category, user, account],
    )
    .unwrap();
}

fn stored_amount(conn: &Connection, id: i64) -> Decimal {
    let s: String = conn
        .query_row("SELECT amount FROM transactions WHERE id=?1", [id], |r| r.get(0))
        .unwrap();
    s.parse().unwrap()
}

#[test]
fn normalization_is_sign_blind() {
    assert_eq!(normalized_amount(TxKind::Despesa, dec("50")), dec("-50"));
    assert_eq!(normalized_amount(TxKind::Despesa, dec("-50")), dec("-50"));
    assert_eq!(normalized_amount(TxKind::Receita, dec("30")), dec("30"));
    assert_eq!(normalized_amount(TxKind::Receita, dec("-30")), dec("30"));
}

#[test]
fn add_requires_an_account() {
    let conn = setup();
    let mut tx = new_tx(TxKind::Despesa, "10");
    tx.account_id = None;
    let err = transactions::add(&conn, tx).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn expense_is_stored_negative() {
    let conn = setup();
    let id = transactions::add(&conn, new_tx(TxKind::Despesa, "50")).unwrap();
    assert_eq!(stored_amount(&conn, id), dec("-50"));
}

#[test]
fn income_is_stored_positive_whatever_the_input_sign() {
    let conn = setup();
    let id = transactions::add(&conn, new_tx(TxKind::Receita, "-30")).unwrap();
    assert_eq!(stored_amount(&conn, id), dec("30"));
}

#[test]
fn update_renormalizes_on_kind_flip() {
    let conn = setup();
    let id = transactions::add(&conn, new_tx(TxKind::Receita, "30")).unwrap();
    let changed = transactions::update(
        &conn,
        id,
        1,
        TransactionUpdate {
            kind: TxKind::Despesa,
            description: "teste".to_string(),
            amount: dec("30"),
            category: "geral".to_string(),
            account_id: None,
        },
    )
    .unwrap();
    assert!(changed);
    assert_eq!(stored_amount(&conn, id), dec("-30"));
}

#[test]
fn update_by_another_user_is_a_noop() {
    let conn = setup();
    let id = transactions::add(&conn, new_tx(TxKind::Despesa, "50")).unwrap();
    let changed = transactions::update(
        &conn,
        id,
        2,
        TransactionUpdate {
            kind: TxKind::Receita,
            description: "hijack".to_string(),
            amount: dec("999"),
            category: "x".to_string(),
            account_id: Some(3),
        },
    )
    .unwrap();
    assert!(!changed);
    assert_eq!(stored_amount(&conn, id), dec("-50"));
}

#[test]
fn delete_by_another_user_is_a_noop() {
    let conn = setup();
    let id = transactions::add(&conn, new_tx(TxKind::Despesa, "50")).unwrap();
    assert!(!transactions::delete(&conn, id, 2).unwrap());
    assert!(transactions::get(&conn, id, 1).unwrap().is_some());

    assert!(transactions::delete(&conn, id, 1).unwrap());
    assert!(transactions::get(&conn, id, 1).unwrap().is_none());
}

#[test]
fn get_is_scoped_by_owner() {
    let conn = setup();
    let id = transactions::add(&conn, new_tx(TxKind::Receita, "10")).unwrap();
    assert!(transactions::get(&conn, id, 2).unwrap().is_none());
    let tx = transactions::get(&conn, id, 1).unwrap().unwrap();
    assert_eq!(tx.amount, dec("10"));
    assert_eq!(tx.account_id, 1);
}

#[test]
fn list_joins_account_name_and_orders_newest_first() {
    let conn = setup();
    seed(&conn, "2024-03-05", "despesa", "-10", "geral", 1, 1);
    seed(&conn, "2024-03-10", "receita", "20", "geral", 1, 2);
    seed(&conn, "2024-03-10", "despesa", "-5", "geral", 1, 1);

    let rows = transactions::list(&conn, 1, None, None).unwrap();
    assert_eq!(rows.len(), 3);
    // Same-day ties fall back to insertion order, newest insert first.
    assert_eq!(rows[0].amount, dec("-5"));
    assert_eq!(rows[1].amount, dec("20"));
    assert_eq!(rows[1].account_name, "Banco");
    assert_eq!(rows[2].amount, dec("-10"));
    assert_eq!(rows[2].account_name, "Carteira");
}

#[test]
fn list_never_shows_other_users_rows() {
    let conn = setup();
    seed(&conn, "2024-03-05", "despesa", "-10", "geral", 1, 1);
    seed(&conn, "2024-03-06", "despesa", "-99", "geral", 2, 3);
    let rows = transactions::list(&conn, 1, None, None).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, dec("-10"));
}

#[test]
fn month_and_year_filters_are_inclusive_and_independent() {
    let conn = setup();
    seed(&conn, "2024-03-15", "despesa", "-1", "geral", 1, 1);
    seed(&conn, "2023-03-20", "despesa", "-2", "geral", 1, 1);
    seed(&conn, "2024-04-01", "despesa", "-3", "geral", 1, 1);

    // Month only: March of any year.
    let rows = transactions::list(&conn, 1, Some(3), None).unwrap();
    assert_eq!(rows.len(), 2);

    // Year only: all of 2024.
    let rows = transactions::list(&conn, 1, None, Some(2024)).unwrap();
    assert_eq!(rows.len(), 2);

    // Both: exactly March 2024.
    let rows = transactions::list(&conn, 1, Some(3), Some(2024)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, dec("-1"));
}

#[test]
fn out_of_range_month_is_rejected() {
    let conn = setup();
    let err = transactions::list(&conn, 1, Some(13), None).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn update_without_account_keeps_the_stored_one() {
    let conn = setup();
    let id = transactions::add(&conn, new_tx(TxKind::Despesa, "50")).unwrap();
    transactions::update(
        &conn,
        id,
        1,
        TransactionUpdate {
            kind: TxKind::Despesa,
            description: "teste".to_string(),
            amount: dec("50"),
            category: "geral".to_string(),
            account_id: None,
        },
    )
    .unwrap();
    assert_eq!(transactions::get(&conn, id, 1).unwrap().unwrap().account_id, 1);

    transactions::update(
        &conn,
        id,
        1,
        TransactionUpdate {
            kind: TxKind::Despesa,
            description: "teste".to_string(),
            amount: dec("50"),
            category: "geral".to_string(),
            account_id: Some(2),
        },
    )
    .unwrap();
    assert_eq!(transactions::get(&conn, id, 1).unwrap().unwrap().account_id, 2);
}
