use crate::db::queries::{EntryFilter, list_entries};
use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, ExportFormat, export_csv, export_json};
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use crate::utils::path::{ensure_writable, is_absolute};
use rusqlite::Connection;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    ///   optionally as `FROM:TO`
    ///
    /// Returns the number of exported entries.
    pub fn export(
        conn: &Connection,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }
        let path = Path::new(file);

        let mut filter = EntryFilter::default();
        if let Some(r) = range
            && !r.eq_ignore_ascii_case("all")
        {
            let (from, to) = resolve_period(r).map_err(AppError::InvalidPeriod)?;
            filter.from = Some(from);
            filter.to = Some(to);
        }

        let mut entries = list_entries(conn, &filter)?;

        if entries.is_empty() {
            warning("No entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        // exports read oldest first
        entries.reverse();
        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
