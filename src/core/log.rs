use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::LazyLock;

const OP_WIDTH_LIMIT: usize = 60;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern")
});

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI color for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "settle" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(conn: &Connection) -> AppResult<Vec<LogRow>> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = Self::load(conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let op_target = |r: &LogRow| {
            if r.target.is_empty() {
                r.operation.clone()
            } else {
                format!("{} ({})", r.operation, r.target)
            }
        };

        let op_w = entries
            .iter()
            .map(|r| op_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);
        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for r in &entries {
            let color = color_for_operation(&r.operation);

            let mut colored = color.paint(r.operation.as_str()).to_string();
            if !r.target.is_empty() {
                colored.push_str(&format!(" ({})", r.target));
            }

            // truncate on visible characters, then paint again
            let visible = strip_ansi(&colored);
            let shown = if visible.chars().count() > OP_WIDTH_LIMIT {
                let cut: String = visible.chars().take(OP_WIDTH_LIMIT - 3).collect();
                let rest = cut
                    .strip_prefix(r.operation.as_str())
                    .unwrap_or(cut.as_str())
                    .to_string();
                format!("{}{}...", color.paint(r.operation.as_str()), rest)
            } else {
                colored
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                r.id,
                r.date,
                shown,
                padding,
                r.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
