#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use dairyledger::core::add::AddLogic;
use dairyledger::db::initialize::init_db;
use dairyledger::models::entry::{Entry, NewEntry};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary runner with HOME pointed at a private directory, so a real user
/// configuration never leaks into the tests.
pub fn dl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("dairyledger_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("dairyledger");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dairyledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB through the CLI
pub fn init_cli_db(db_path: &str) {
    dl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// In-memory ledger with the full schema
pub fn open_ledger() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Record an entry through the same path the `add` command uses.
pub fn add_entry(
    conn: &Connection,
    date: &str,
    merchant: &str,
    item: &str,
    weight: f64,
    price: f64,
    paid: f64,
) -> Entry {
    AddLogic::apply(
        conn,
        NewEntry {
            date: day(date),
            merchant_name: merchant.to_string(),
            item: item.to_string(),
            weight,
            unit: "pcs".to_string(),
            price_per_unit: price,
            paid,
        },
    )
    .expect("add entry")
}

pub fn total_due(conn: &Connection, merchant: &str) -> f64 {
    conn.query_row(
        "SELECT COALESCE(SUM(due), 0.0) FROM entries WHERE merchant_name = ?1",
        [merchant],
        |row| row.get(0),
    )
    .expect("sum dues")
}
