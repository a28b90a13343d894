//! Debt settlement: spread a lump payment over a merchant's outstanding
//! entries, oldest first (`date`, then `created_at`, then `id`).

use crate::db::log::audit;
use crate::db::queries::{merchant_dues, outstanding_entries, update_paid_due};
use crate::errors::{AppError, AppResult};
use crate::models::settlement::{Allocation, MerchantDue, OverpaymentPolicy, Settlement};
use rusqlite::Connection;

/// Amounts below this are float residue, not money.
const ROUNDING_EPSILON: f64 = 1e-9;

/// Apply `payment` to the outstanding entries of `merchant`.
///
/// Every update, plus the audit line, runs in one transaction: either all
/// entries are updated or none is.
pub fn settle(
    conn: &mut Connection,
    merchant: &str,
    payment: f64,
    policy: OverpaymentPolicy,
) -> AppResult<Settlement> {
    if !payment.is_finite() || payment < 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "payment must be a non-negative number, got {}",
            payment
        )));
    }

    // stored names are trimmed by `AddLogic::apply`
    let merchant = merchant.trim();

    let tx = conn.transaction()?;

    let entries = outstanding_entries(&tx, merchant)?;

    if policy == OverpaymentPolicy::Reject {
        let outstanding: f64 = entries.iter().map(|e| e.due).sum();
        if payment > outstanding + ROUNDING_EPSILON {
            return Err(AppError::Overpayment {
                merchant: merchant.to_string(),
                payment,
                outstanding,
            });
        }
    }

    let mut remaining = payment;
    let mut allocations = Vec::new();

    for entry in entries {
        if remaining <= ROUNDING_EPSILON {
            break;
        }

        let pay = entry.due.min(remaining);
        let paid = entry.paid + pay;
        let mut due = entry.due - pay;
        if due.abs() < ROUNDING_EPSILON {
            due = 0.0;
        }
        remaining -= pay;

        update_paid_due(&tx, entry.id, paid, due)?;

        allocations.push(Allocation {
            entry_id: entry.id,
            date: entry.date,
            item: entry.item,
            applied: pay,
            remaining_due: due,
        });
    }

    let unapplied = if remaining > ROUNDING_EPSILON {
        remaining
    } else {
        0.0
    };

    let mut message = format!(
        "Payment {:.2} applied to {} entries",
        payment - unapplied,
        allocations.len()
    );
    if unapplied > 0.0 {
        message.push_str(&format!(", {:.2} unapplied", unapplied));
    }
    audit(&tx, "settle", merchant, &message)?;

    tx.commit()?;

    Ok(Settlement {
        merchant: merchant.to_string(),
        payment,
        allocations,
        unapplied,
    })
}

/// Merchants with a positive total due, by name.
pub fn outstanding_by_merchant(conn: &Connection) -> AppResult<Vec<MerchantDue>> {
    merchant_dues(conn)
}
