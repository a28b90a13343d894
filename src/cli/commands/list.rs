use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{EntryFilter, list_entries};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::ui::messages::info;
use crate::utils::colors::{color_for_due, colorize};
use crate::utils::date;
use crate::utils::formatting::{bold, quantity};
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    if let Commands::List {
        merchant,
        period,
        now,
    } = cmd
    {
        let mut filter = EntryFilter {
            merchant: merchant.as_deref().map(str::trim).map(String::from),
            ..EntryFilter::default()
        };

        if *now {
            let today = date::today();
            filter.from = Some(today);
            filter.to = Some(today);
        } else if let Some(p) = period {
            let (from, to) = date::resolve_period(p).map_err(AppError::InvalidPeriod)?;
            filter.from = Some(from);
            filter.to = Some(to);
        }

        let entries = list_entries(&pool.conn, &filter)?;

        if entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        println!("📒 Entries ({}):\n", entries.len());
        print!("{}", render_entries(&entries, cfg));

        let outstanding: f64 = entries.iter().map(|e| e.due).filter(|d| *d > 0.0).sum();
        println!(
            "\n{} {}",
            bold("Outstanding in listed entries:"),
            colorize(&money(&cfg.currency, outstanding), color_for_due(outstanding))
        );
    }
    Ok(())
}

fn render_entries(entries: &[Entry], cfg: &Config) -> String {
    let mut table = Table::new(
        vec![
            Column::right("ID"),
            Column::left("Date"),
            Column::left("Merchant"),
            Column::left("Item"),
            Column::right("Qty"),
            Column::left("Unit"),
            Column::right("Price"),
            Column::right("Cost"),
            Column::right("Paid"),
            Column::right("Due"),
        ],
        &cfg.separator_char,
    );

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            e.merchant_name.clone(),
            e.item.clone(),
            quantity(e.weight),
            e.unit.clone(),
            money(&cfg.currency, e.price_per_unit),
            money(&cfg.currency, e.cost),
            money(&cfg.currency, e.paid),
            money(&cfg.currency, e.due),
        ]);
    }

    table.render()
}
