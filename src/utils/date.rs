use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD` or the keyword `today`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First and last day covered by a single period expression
/// (`YYYY-MM-DD`, `YYYY-MM` or `YYYY`).
pub fn bounds_of_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return last_day_of_month(first.year(), first.month())
            .map(|last| (first, last))
            .ok_or_else(|| p.to_string());
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(p.to_string())
}

/// Resolve a period filter: a single period or `FROM:TO`.
pub fn resolve_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = bounds_of_period(start.trim())?;
        let (_, to) = bounds_of_period(end.trim())?;
        if from > to {
            return Err(format!("{} is after {}", start, end));
        }
        return Ok((from, to));
    }

    bounds_of_period(p.trim())
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
