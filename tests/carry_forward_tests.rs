mod common;
use common::{add_entry, day, open_ledger};
use dairyledger::core::add::AddLogic;
use dairyledger::core::due::{carried_due, compute_due};
use dairyledger::errors::AppError;
use dairyledger::models::entry::NewEntry;

#[test]
fn test_next_day_entry_carries_previous_due() {
    let conn = open_ledger();

    let e1 = add_entry(&conn, "2024-01-01", "Anand", "Milk (1 Litre)", 1.0, 60.0, 50.0);
    assert_eq!(e1.cost, 60.0);
    assert_eq!(e1.due, 10.0);

    let e2 = add_entry(&conn, "2024-01-02", "Anand", "Milk (1 Litre)", 1.0, 60.0, 40.0);
    assert_eq!(e2.due, e1.due + e2.cost - e2.paid);
    assert_eq!(e2.due, 30.0);
}

#[test]
fn test_first_entry_due_is_cost_minus_paid() {
    let conn = open_ledger();

    let e = add_entry(&conn, "2024-03-10", "Ravi Stores", "Curd (500g)", 4.0, 45.0, 100.0);
    assert_eq!(e.cost, 180.0);
    assert_eq!(e.due, 80.0);
}

#[test]
fn test_gap_of_two_days_resets_carried_due() {
    let conn = open_ledger();

    add_entry(&conn, "2024-01-01", "Anand", "Milk (1 Litre)", 1.0, 60.0, 0.0);
    let later = add_entry(&conn, "2024-01-03", "Anand", "Milk (1 Litre)", 1.0, 60.0, 0.0);

    // 2024-01-02 is empty, so the unpaid 60 of the 1st is not carried
    assert_eq!(later.due, 60.0);
}

#[test]
fn test_carry_forward_is_per_merchant_and_item() {
    let conn = open_ledger();

    add_entry(&conn, "2024-01-01", "Anand", "Milk (1 Litre)", 1.0, 60.0, 0.0);
    add_entry(&conn, "2024-01-01", "Bala", "Curd (500g)", 1.0, 45.0, 0.0);

    let other_item = add_entry(&conn, "2024-01-02", "Anand", "Curd (500g)", 1.0, 45.0, 45.0);
    assert_eq!(other_item.due, 0.0);

    let other_merchant = add_entry(&conn, "2024-01-02", "Bala", "Milk (1 Litre)", 1.0, 60.0, 0.0);
    assert_eq!(other_merchant.due, 60.0);
}

#[test]
fn test_latest_created_prior_entry_wins() {
    let conn = open_ledger();

    add_entry(&conn, "2024-01-01", "Anand", "Ghee (200ml)", 1.0, 150.0, 100.0); // due 50
    add_entry(&conn, "2024-01-01", "Anand", "Ghee (200ml)", 1.0, 150.0, 150.0); // due 0

    assert_eq!(
        carried_due(&conn, day("2024-01-02"), "Anand", "Ghee (200ml)").unwrap(),
        0.0
    );

    let next = add_entry(&conn, "2024-01-02", "Anand", "Ghee (200ml)", 2.0, 150.0, 200.0);
    assert_eq!(next.due, 100.0);
}

#[test]
fn test_same_day_entries_do_not_chain() {
    let conn = open_ledger();

    add_entry(&conn, "2024-05-01", "Anand", "Butter (100g)", 1.0, 55.0, 0.0);
    let second = add_entry(&conn, "2024-05-01", "Anand", "Butter (100g)", 1.0, 55.0, 0.0);

    // only the previous calendar day is consulted
    assert_eq!(second.due, 55.0);
}

#[test]
fn test_compute_due_is_read_only() {
    let conn = open_ledger();
    add_entry(&conn, "2024-01-01", "Anand", "Milk (1 Litre)", 1.0, 60.0, 50.0);

    let due = compute_due(&conn, day("2024-01-02"), "Anand", "Milk (1 Litre)", 60.0, 40.0).unwrap();
    assert_eq!(due, 30.0);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_overpaid_entry_carries_negative_due() {
    let conn = open_ledger();

    let e1 = add_entry(&conn, "2024-01-01", "Anand", "Lassi (200ml)", 2.0, 30.0, 100.0);
    assert_eq!(e1.due, -40.0);

    let e2 = add_entry(&conn, "2024-01-02", "Anand", "Lassi (200ml)", 2.0, 30.0, 0.0);
    assert_eq!(e2.due, 20.0);
}

#[test]
fn test_invalid_entries_are_rejected_before_writing() {
    let conn = open_ledger();

    let base = NewEntry {
        date: day("2024-01-01"),
        merchant_name: "Anand".to_string(),
        item: "Milk (1 Litre)".to_string(),
        weight: 1.0,
        unit: "litre".to_string(),
        price_per_unit: 60.0,
        paid: 0.0,
    };

    let short_name = NewEntry {
        merchant_name: "A".to_string(),
        ..base.clone()
    };
    let no_weight = NewEntry {
        weight: 0.0,
        ..base.clone()
    };
    let negative_paid = NewEntry {
        paid: -1.0,
        ..base.clone()
    };
    let negative_price = NewEntry {
        price_per_unit: -5.0,
        ..base.clone()
    };

    for bad in [short_name, no_weight, negative_paid, negative_price] {
        assert!(matches!(
            AddLogic::apply(&conn, bad),
            Err(AppError::Validation(_))
        ));
    }

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_add_writes_audit_line() {
    let conn = open_ledger();
    add_entry(&conn, "2024-01-01", "Anand", "Milk (1 Litre)", 1.0, 60.0, 50.0);

    let target: String = conn
        .query_row(
            "SELECT target FROM log WHERE operation = 'add' ORDER BY id DESC LIMIT 1",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(target, "Anand / Milk (1 Litre)");
}
