use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_cost: f64,
    pub total_paid: f64,
    pub total_cash_income: f64,
    pub profit_loss: f64,
    /// Sum of the latest due of every (merchant, item) pair seen that day.
    pub total_dues_today: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    NoData { date: NaiveDate },
    Report(DailySummary),
}
