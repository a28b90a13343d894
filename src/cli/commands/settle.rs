use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settle::settle;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::money;

pub fn handle(cmd: &Commands, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if let Commands::Settle { merchant, amount } = cmd {
        let result = settle(&mut pool.conn, merchant, *amount, cfg.overpayment)?;

        if result.allocations.is_empty() {
            info(format!("{} has no outstanding dues.", result.merchant));
        } else {
            for a in &result.allocations {
                println!(
                    "   entry {} ({} {}): applied {}, due now {}",
                    a.entry_id,
                    a.date.format("%Y-%m-%d"),
                    a.item,
                    money(&cfg.currency, a.applied),
                    money(&cfg.currency, a.remaining_due),
                );
            }
            success(format!(
                "{}'s dues updated: {} applied to {} entries.",
                result.merchant,
                money(&cfg.currency, result.total_applied()),
                result.allocations.len()
            ));
        }

        if result.unapplied > 0.0 {
            warning(format!(
                "{} exceeds the outstanding dues and was not applied.",
                money(&cfg.currency, result.unapplied)
            ));
        }
    }

    Ok(())
}
