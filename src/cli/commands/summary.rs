use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::summarize;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::summary::SummaryOutcome;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_balance, color_for_due, colorize};
use crate::utils::date;
use crate::utils::money;

pub fn handle(cmd: &Commands, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    if let Commands::Summary { date, income } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        if !income.is_finite() || *income < 0.0 {
            return Err(AppError::InvalidAmount(format!(
                "cash income must be a non-negative number, got {}",
                income
            )));
        }

        match summarize(&pool.conn, d, *income)? {
            SummaryOutcome::NoData { date } => {
                info(format!("No entries found for {}.", date.format("%Y-%m-%d")));
            }
            SummaryOutcome::Report(s) => {
                let m = |v: f64| money(&cfg.currency, v);

                header(format!("Daily summary {}", s.date.format("%Y-%m-%d")));
                println!("Total cost:        {}", m(s.total_cost));
                println!("Total paid:        {}", m(s.total_paid));
                println!("Total cash income: {}", m(s.total_cash_income));
                println!(
                    "Profit/Loss:       {}",
                    colorize(&m(s.profit_loss), color_for_balance(s.profit_loss))
                );
                println!(
                    "Dues today:        {}",
                    colorize(&m(s.total_dues_today), color_for_due(s.total_dues_today))
                );
            }
        }
    }

    Ok(())
}
