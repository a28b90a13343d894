//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Amount with two decimals and the configured currency symbol.
pub fn money(currency: &str, amount: f64) -> String {
    // avoid printing "-0.00" for values that rounded to zero
    let rounded = (amount * 100.0).round() / 100.0;
    let value = if rounded == 0.0 { 0.0 } else { rounded };
    if value < 0.0 {
        format!("-{}{:.2}", currency, value.abs())
    } else {
        format!("{}{:.2}", currency, value)
    }
}

/// Quantity without trailing zeros: 2 → "2", 0.5 → "0.5".
pub fn quantity(value: f64) -> String {
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
