use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What to do with the part of a payment that exceeds the total outstanding due.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverpaymentPolicy {
    /// Apply what fits and report the remainder as unapplied.
    #[default]
    Absorb,
    /// Refuse the whole payment, nothing is written.
    Reject,
}

/// Amount of a payment applied to one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub entry_id: i64,
    pub date: NaiveDate,
    pub item: String,
    pub applied: f64,
    pub remaining_due: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub merchant: String,
    pub payment: f64,
    pub allocations: Vec<Allocation>,
    /// Part of the payment not applied to any entry.
    pub unapplied: f64,
}

impl Settlement {
    pub fn total_applied(&self) -> f64 {
        self.allocations.iter().map(|a| a.applied).sum()
    }
}

/// Outstanding balance of one merchant across all entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantDue {
    pub merchant: String,
    pub total_due: f64,
}
