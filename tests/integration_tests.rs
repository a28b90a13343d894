use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{dl, init_cli_db, setup_test_db, temp_out};

fn add(db_path: &str, args: &[&str]) {
    dl().args(["--db", db_path, "add"])
        .args(args)
        .assert()
        .success();
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    dl().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_check_flags_tampered_cost() {
    let db_path = setup_test_db("cli_check_cost");
    init_cli_db(&db_path);
    add(&db_path, &["2024-01-01", "Anand", "Milk (1 Litre)", "2", "--price", "50"]);

    dl().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Entry costs are consistent"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute("UPDATE entries SET cost = 999.0", []).unwrap();
    drop(conn);

    dl().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("cost differs from weight × price"));
}

#[test]
fn test_add_carries_due_to_next_day() {
    let db_path = setup_test_db("cli_carry");
    init_cli_db(&db_path);

    dl().args([
        "--db",
        &db_path,
        "add",
        "2024-01-01",
        "Anand",
        "Milk (1 Litre)",
        "1",
        "--paid",
        "50",
    ])
    .assert()
    .success()
    .stdout(contains("due: ₹10.00"));

    dl().args([
        "--db",
        &db_path,
        "add",
        "2024-01-02",
        "Anand",
        "milk (1 litre)",
        "1",
        "--paid",
        "40",
    ])
    .assert()
    .success()
    .stdout(contains("Anand / Milk (1 Litre)"))
    .stdout(contains("due: ₹30.00"));
}

#[test]
fn test_add_uses_catalog_price_unless_overridden() {
    let db_path = setup_test_db("cli_price");
    init_cli_db(&db_path);

    dl().args([
        "--db",
        &db_path,
        "add",
        "2024-01-01",
        "Anand",
        "Paneer (200g)",
        "2",
    ])
    .assert()
    .success()
    .stdout(contains("cost: ₹160.00"));

    dl().args([
        "--db",
        &db_path,
        "add",
        "2024-01-01",
        "Anand",
        "Goat Milk",
        "3",
        "--price",
        "90",
        "--unit",
        "litre",
    ])
    .assert()
    .success()
    .stdout(contains("not in the product catalog"))
    .stdout(contains("cost: ₹270.00"));

    dl().args(["--db", &db_path, "add", "2024-01-01", "Anand", "Goat Milk", "3"])
        .assert()
        .failure()
        .stderr(contains("no --price given"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_invalid");
    init_cli_db(&db_path);

    dl().args(["--db", &db_path, "add", "2024-13-45", "Anand", "Curd (500g)", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    dl().args(["--db", &db_path, "add", "2024-01-01", "Anand", "Curd (500g)", "0"])
        .assert()
        .failure()
        .stderr(contains("weight must be at least 0.01"));

    dl().args([
        "--db",
        &db_path,
        "add",
        "2024-01-01",
        "Anand",
        "Curd (500g)",
        "1",
        "--paid",
        "-3",
    ])
    .assert()
    .failure()
    .stderr(contains("paid amount must be non-negative"));
}

#[test]
fn test_settle_allocates_oldest_first() {
    let db_path = setup_test_db("cli_settle");
    init_cli_db(&db_path);

    add(
        &db_path,
        &["2024-01-01", "Anand", "Milk (1 Litre)", "1", "--paid", "50"],
    );
    add(
        &db_path,
        &["2024-01-05", "Anand", "Curd (500g)", "1", "--paid", "15"],
    );

    dl().args(["--db", &db_path, "dues"])
        .assert()
        .success()
        .stdout(contains("Anand"))
        .stdout(contains("₹40.00"));

    dl().args(["--db", &db_path, "settle", "Anand", "25"])
        .assert()
        .success()
        .stdout(contains("applied ₹10.00, due now ₹0.00"))
        .stdout(contains("applied ₹15.00, due now ₹15.00"))
        .stdout(contains("Anand's dues updated"));

    dl().args(["--db", &db_path, "dues"])
        .assert()
        .success()
        .stdout(contains("₹15.00"));
}

#[test]
fn test_settle_reports_overpayment_and_rejects_negative() {
    let db_path = setup_test_db("cli_overpay");
    init_cli_db(&db_path);

    add(
        &db_path,
        &["2024-01-01", "Anand", "Milk (1 Litre)", "1", "--paid", "50"],
    );

    dl().args(["--db", &db_path, "settle", "Anand", "-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    dl().args(["--db", &db_path, "settle", "Anand", "25"])
        .assert()
        .success()
        .stdout(contains("₹15.00 exceeds the outstanding dues"));

    dl().args(["--db", &db_path, "dues"])
        .assert()
        .success()
        .stdout(contains("No outstanding dues"));
}

#[test]
fn test_summary_report_and_no_data() {
    let db_path = setup_test_db("cli_summary");
    init_cli_db(&db_path);

    add(
        &db_path,
        &["2024-01-01", "Anand", "Milk (1 Litre)", "2", "--paid", "100"],
    );

    dl().args(["--db", &db_path, "summary", "2024-01-01", "--income", "150"])
        .assert()
        .success()
        .stdout(contains("Daily summary 2024-01-01"))
        .stdout(contains("₹120.00"))
        .stdout(contains("₹30.00"))
        .stdout(contains("₹20.00"));

    dl().args(["--db", &db_path, "summary", "2024-01-03", "--income", "150"])
        .assert()
        .success()
        .stdout(contains("No entries found for 2024-01-03."))
        .stdout(contains("Daily summary").not());

    dl().args(["--db", &db_path, "summary", "2024-01-01", "--income", "-1"])
        .assert()
        .failure()
        .stderr(contains("cash income must be a non-negative number"));
}

#[test]
fn test_list_filters_by_merchant_and_period() {
    let db_path = setup_test_db("cli_list");
    init_cli_db(&db_path);

    add(&db_path, &["2024-01-10", "Anand", "Ghee (200ml)", "1"]);
    add(&db_path, &["2024-02-10", "Bala", "Butter (100g)", "1"]);
    add(&db_path, &["2023-12-31", "Bala", "Lassi (200ml)", "1"]);

    dl().args(["--db", &db_path, "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("2024-01-10"))
        .stdout(contains("2024-02-10"))
        .stdout(contains("2023-12-31").not());

    dl().args(["--db", &db_path, "list", "--merchant", " Bala "])
        .assert()
        .success()
        .stdout(contains("Entries (2)"));

    dl().args(["--db", &db_path, "list", "--merchant", "Bala"])
        .assert()
        .success()
        .stdout(contains("Butter (100g)"))
        .stdout(contains("Lassi (200ml)"))
        .stdout(contains("Ghee (200ml)").not());

    dl().args(["--db", &db_path, "list", "--period", "2023-12:2024-01"])
        .assert()
        .success()
        .stdout(contains("Entries (2)"));

    dl().args(["--db", &db_path, "list", "--period", "2024-1x"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_cli_db(&db_path);

    add(
        &db_path,
        &["2024-01-01", "Anand", "Milk (1 Litre)", "1", "--paid", "50"],
    );
    add(&db_path, &["2024-02-01", "Bala", "Curd (500g)", "1"]);

    let csv_out = temp_out("cli_export_csv", "csv");
    dl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range", "2024-01",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed (1 entries)"));

    let csv = fs::read_to_string(&csv_out).unwrap();
    assert!(csv.starts_with("id,date,merchant_name,item"));
    assert!(csv.contains("Anand"));
    assert!(!csv.contains("Bala"));

    let json_out = temp_out("cli_export_json", "json");
    dl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &json_out,
    ])
    .assert()
    .success();

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap())
        .expect("valid json");
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["merchant_name"], "Anand");
    assert_eq!(rows[0]["due"], 10.0);

    dl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_log_and_catalog() {
    let db_path = setup_test_db("cli_backup");
    init_cli_db(&db_path);
    add(&db_path, &["2024-01-01", "Anand", "Milk (1 Litre)", "1"]);
    dl().args(["--db", &db_path, "settle", "Anand", "60"])
        .assert()
        .success();

    let zip_out = temp_out("cli_backup", "zip");
    let plain = zip_out.replace(".zip", ".sqlite");
    fs::remove_file(&plain).ok();

    dl().args(["--db", &db_path, "backup", "--file", &zip_out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(fs::metadata(&zip_out).is_ok());
    assert!(fs::metadata(&plain).is_err());

    dl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Anand / Milk (1 Litre)"))
        .stdout(contains("Payment 60.00 applied to 1 entries"))
        .stdout(contains("Backup created and compressed"));

    dl().args(["catalog"])
        .assert()
        .success()
        .stdout(contains("Paneer (200g)"))
        .stdout(contains("₹150.00"));
}

#[test]
fn test_db_info_reports_outstanding() {
    let db_path = setup_test_db("cli_db_info");
    init_cli_db(&db_path);
    add(&db_path, &["2024-01-01", "Anand", "Cream (250ml)", "1"]);

    dl().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total entries:"))
        .stdout(contains("2024-01-01"))
        .stdout(contains("₹70.00"));
}

#[test]
fn test_compressed_backup_next_to_database_keeps_it() {
    let db_path = setup_test_db("cli_backup_beside");
    init_cli_db(&db_path);
    add(&db_path, &["2024-01-01", "Anand", "Milk (1 Litre)", "1", "--paid", "20"]);

    let zip_out = db_path.replace(".sqlite", ".zip");
    fs::remove_file(&zip_out).ok();

    dl().args(["--db", &db_path, "backup", "--file", &zip_out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(fs::metadata(&zip_out).is_ok());
    assert!(fs::metadata(&db_path).is_ok());

    dl().args(["--db", &db_path, "dues"])
        .assert()
        .success()
        .stdout(contains("Anand"));
}

#[test]
fn test_backup_onto_database_file_is_refused() {
    let db_path = setup_test_db("cli_backup_self");
    init_cli_db(&db_path);
    add(&db_path, &["2024-01-01", "Anand", "Milk (1 Litre)", "1", "--paid", "20"]);

    dl().args(["--db", &db_path, "backup", "--file", &db_path])
        .assert()
        .failure()
        .stderr(contains("is the database itself"));

    dl().args(["--db", &db_path, "dues"])
        .assert()
        .success()
        .stdout(contains("Anand"));
}

#[test]
fn test_add_without_paid_leaves_whole_cost_due() {
    let db_path = setup_test_db("cli_paid_default");
    init_cli_db(&db_path);

    dl().args(["--db", &db_path, "add", "2024-01-01", "Anand", "Milk (1 Litre)", "2"])
        .assert()
        .success()
        .stdout(contains("paid: ₹0.00"))
        .stdout(contains("due: ₹120.00"));
}
